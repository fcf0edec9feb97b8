//! 监考老师与空闲时间存储操作

use super::SeaOrmStorage;
use crate::entity::invigilator_availability::{
    ActiveModel as AvailabilityActiveModel, Column as AvailabilityColumn,
    Entity as InvigilatorAvailability,
};
use crate::entity::invigilators::{ActiveModel, Column, Entity as Invigilators};
use crate::errors::{Result, SeaterError};
use crate::models::invigilators::{
    entities::{Availability, Invigilator},
    requests::{CreateInvigilatorRequest, NewAvailability},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建监考老师
    pub async fn create_invigilator_impl(
        &self,
        req: CreateInvigilatorRequest,
    ) -> Result<Invigilator> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            employee_no: Set(req.emp),
            dept: Set(req.dept),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("创建监考老师失败", e))?;

        Ok(result.into_invigilator())
    }

    /// 通过 ID 获取监考老师
    pub async fn get_invigilator_by_id_impl(
        &self,
        invigilator_id: i64,
    ) -> Result<Option<Invigilator>> {
        let result = Invigilators::find_by_id(invigilator_id)
            .one(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("查询监考老师失败", e))?;

        Ok(result.map(|m| m.into_invigilator()))
    }

    /// 列出监考老师
    pub async fn list_invigilators_impl(&self) -> Result<Vec<Invigilator>> {
        let invigilators = Invigilators::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("查询监考老师列表失败", e))?;

        Ok(invigilators
            .into_iter()
            .map(|m| m.into_invigilator())
            .collect())
    }

    /// 删除监考老师
    pub async fn delete_invigilator_impl(&self, invigilator_id: i64) -> Result<bool> {
        let result = Invigilators::delete_by_id(invigilator_id)
            .exec(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("删除监考老师失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 登记空闲时间
    pub async fn create_availability_impl(
        &self,
        invigilator_id: i64,
        availability: NewAvailability,
    ) -> Result<Availability> {
        let model = AvailabilityActiveModel {
            invigilator_id: Set(invigilator_id),
            date: Set(availability.date),
            start_time: Set(availability.start_time),
            end_time: Set(availability.end_time),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("登记空闲时间失败", e))?;

        Ok(result.into_availability())
    }

    /// 列出某位监考老师的空闲时间
    pub async fn list_availability_impl(&self, invigilator_id: i64) -> Result<Vec<Availability>> {
        let slots = InvigilatorAvailability::find()
            .filter(AvailabilityColumn::InvigilatorId.eq(invigilator_id))
            .order_by_asc(AvailabilityColumn::Date)
            .order_by_asc(AvailabilityColumn::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("查询空闲时间失败", e))?;

        Ok(slots.into_iter().map(|m| m.into_availability()).collect())
    }

    /// 删除空闲时间，必须属于该监考老师
    pub async fn delete_availability_impl(
        &self,
        invigilator_id: i64,
        avail_id: i64,
    ) -> Result<bool> {
        let result = InvigilatorAvailability::delete_many()
            .filter(AvailabilityColumn::Id.eq(avail_id))
            .filter(AvailabilityColumn::InvigilatorId.eq(invigilator_id))
            .exec(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("删除空闲时间失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
