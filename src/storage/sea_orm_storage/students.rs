//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SeaterError};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            roll_no: Set(req.roll),
            name: Set(req.name),
            department: Set(req.dept),
            year: Set(req.year),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("创建学生失败", e))?;

        Ok(result.into_student())
    }

    /// 列出学生（按创建顺序）
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let students = Students::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("查询学生列表失败", e))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 删除学生，报名与座位记录由外键级联删除
    pub async fn delete_student_impl(&self, student_id: i64) -> Result<bool> {
        let result = Students::delete_by_id(student_id)
            .exec(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("删除学生失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
