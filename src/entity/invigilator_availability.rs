//! 监考老师空闲时间实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "invigilator_availability")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub invigilator_id: i64,
    pub date: chrono::NaiveDate,
    pub start_time: chrono::NaiveTime,
    pub end_time: chrono::NaiveTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::invigilators::Entity",
        from = "Column::InvigilatorId",
        to = "super::invigilators::Column::Id"
    )]
    Invigilator,
}

impl Related<super::invigilators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invigilator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_availability(self) -> crate::models::invigilators::entities::Availability {
        crate::models::invigilators::entities::Availability {
            avail_id: self.id,
            invigilator_id: self.invigilator_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}
