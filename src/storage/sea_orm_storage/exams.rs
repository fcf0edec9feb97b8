//! 考试存储操作

use super::SeaOrmStorage;
use crate::entity::exams::{ActiveModel, Column, Entity as Exams};
use crate::errors::{Result, SeaterError};
use crate::models::exams::{entities::Exam, requests::NewExam};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 创建考试，课程不存在时在同一事务中创建课程
    pub async fn create_exam_impl(&self, exam: NewExam) -> Result<Exam> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SeaterError::from_db("开启事务失败", e))?;

        Self::ensure_course(&txn, &exam.course_code, &exam.course_title).await?;

        let model = ActiveModel {
            course_code: Set(exam.course_code),
            course_title: Set(Some(exam.course_title)),
            exam_date: Set(exam.exam_date),
            start_time: Set(exam.start_time),
            end_time: Set(exam.end_time),
            venue_note: Set(exam.venue_note),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| SeaterError::from_db("创建考试失败", e))?;

        txn.commit()
            .await
            .map_err(|e| SeaterError::from_db("提交事务失败", e))?;

        Ok(result.into_exam())
    }

    /// 通过 ID 获取考试
    pub async fn get_exam_by_id_impl(&self, exam_id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(exam_id)
            .one(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("查询考试失败", e))?;

        Ok(result.map(|m| m.into_exam()))
    }

    /// 列出考试（按日期、开始时间排序）
    pub async fn list_exams_impl(&self) -> Result<Vec<Exam>> {
        let exams = Exams::find()
            .order_by_asc(Column::ExamDate)
            .order_by_asc(Column::StartTime)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("查询考试列表失败", e))?;

        Ok(exams.into_iter().map(|m| m.into_exam()).collect())
    }

    /// 删除考试
    pub async fn delete_exam_impl(&self, exam_id: i64) -> Result<bool> {
        let result = Exams::delete_by_id(exam_id)
            .exec(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("删除考试失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
