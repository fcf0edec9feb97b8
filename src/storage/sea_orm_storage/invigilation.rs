//! 监考安排存储操作

use super::SeaOrmStorage;
use crate::entity::invigilation_assignments::{ActiveModel, Column, Entity as Invigilations};
use crate::errors::{Result, SeaterError};
use crate::models::invigilators::{
    entities::InvigilationAssignment,
    requests::{CreateInvigilationRequest, DEFAULT_INVIGILATION_ROLE},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 安排监考
    pub async fn create_invigilation_impl(
        &self,
        exam_id: i64,
        req: CreateInvigilationRequest,
    ) -> Result<InvigilationAssignment> {
        let role = req
            .role
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INVIGILATION_ROLE.to_string());

        let model = ActiveModel {
            exam_id: Set(exam_id),
            room_id: Set(req.room_id),
            invigilator_id: Set(req.invigilator_id),
            role: Set(role),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("安排监考失败", e))?;

        Ok(result.into_invigilation())
    }

    /// 列出某场考试的监考安排
    pub async fn list_invigilation_impl(
        &self,
        exam_id: i64,
    ) -> Result<Vec<InvigilationAssignment>> {
        let assignments = Invigilations::find()
            .filter(Column::ExamId.eq(exam_id))
            .order_by_asc(Column::RoomId)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("查询监考安排失败", e))?;

        Ok(assignments
            .into_iter()
            .map(|m| m.into_invigilation())
            .collect())
    }

    /// 删除监考安排，必须属于该考试
    pub async fn delete_invigilation_impl(&self, exam_id: i64, assign_id: i64) -> Result<bool> {
        let result = Invigilations::delete_many()
            .filter(Column::Id.eq(assign_id))
            .filter(Column::ExamId.eq(exam_id))
            .exec(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("删除监考安排失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
