//! 考试报名存储操作

use std::collections::HashSet;

use super::SeaOrmStorage;
use crate::entity::exams::Entity as Exams;
use crate::entity::student_exams::{ActiveModel, Column, Entity as StudentExams};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{Result, SeaterError};
use crate::models::registrations::{
    entities::{Registration, STATUS_REGISTERED},
    responses::RegistrationSummary,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use tracing::debug;

impl SeaOrmStorage {
    /// 批量报名
    ///
    /// `student_ids` 为空时报名全部学生；列表中重复的 ID 只处理一次。
    /// 已存在的 (学生, 考试) 组合直接跳过。
    pub async fn register_students_impl(
        &self,
        exam_id: i64,
        student_ids: Option<Vec<i64>>,
    ) -> Result<RegistrationSummary> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SeaterError::from_db("开启事务失败", e))?;

        let exam = Exams::find_by_id(exam_id)
            .one(&txn)
            .await
            .map_err(|e| SeaterError::from_db("查询考试失败", e))?;
        if exam.is_none() {
            return Err(SeaterError::not_found(format!("Exam {exam_id} not found")));
        }

        // 不按 ID 列表查询，避免大批量报名超出 SQL 参数个数上限
        let all_ids: Vec<i64> = Students::find()
            .select_only()
            .column(StudentColumn::Id)
            .order_by_asc(StudentColumn::Id)
            .into_tuple::<i64>()
            .all(&txn)
            .await
            .map_err(|e| SeaterError::from_db("查询学生列表失败", e))?;

        let candidates: Vec<i64> = match student_ids {
            None => all_ids,
            Some(ids) => {
                let mut seen = HashSet::new();
                let ids: Vec<i64> = ids.into_iter().filter(|id| seen.insert(*id)).collect();

                let known: HashSet<i64> = all_ids.into_iter().collect();
                if let Some(missing) = ids.iter().find(|id| !known.contains(id)) {
                    return Err(SeaterError::not_found(format!(
                        "Student {missing} not found"
                    )));
                }
                ids
            }
        };

        let already: HashSet<i64> = StudentExams::find()
            .select_only()
            .column(Column::StudentId)
            .filter(Column::ExamId.eq(exam_id))
            .into_tuple::<i64>()
            .all(&txn)
            .await
            .map_err(|e| SeaterError::from_db("查询报名记录失败", e))?
            .into_iter()
            .collect();

        let now = chrono::Utc::now().timestamp();
        let mut registered = 0;
        for student_id in candidates.iter().copied() {
            if already.contains(&student_id) {
                continue;
            }
            let model = ActiveModel {
                student_id: Set(student_id),
                exam_id: Set(exam_id),
                status: Set(STATUS_REGISTERED.to_string()),
                registered_at: Set(now),
                ..Default::default()
            };
            model
                .insert(&txn)
                .await
                .map_err(|e| SeaterError::from_db("创建报名记录失败", e))?;
            registered += 1;
        }

        txn.commit()
            .await
            .map_err(|e| SeaterError::from_db("提交事务失败", e))?;

        debug!(
            "Exam {} registration: {} new, {} skipped",
            exam_id,
            registered,
            candidates.len() - registered
        );

        Ok(RegistrationSummary {
            exam_id,
            requested: candidates.len(),
            registered,
            skipped: candidates.len() - registered,
        })
    }

    /// 列出全部报名（按报名顺序）
    pub async fn list_registrations_impl(&self) -> Result<Vec<Registration>> {
        let regs = StudentExams::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("查询报名记录失败", e))?;

        Ok(regs.into_iter().map(|m| m.into_registration()).collect())
    }
}
