//! 监考老师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "invigilators")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub employee_no: Option<String>,
    pub dept: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::invigilator_availability::Entity")]
    Availability,
    #[sea_orm(has_many = "super::invigilation_assignments::Entity")]
    InvigilationAssignments,
}

impl Related<super::invigilator_availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Availability.def()
    }
}

impl Related<super::invigilation_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvigilationAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_invigilator(self) -> crate::models::invigilators::entities::Invigilator {
        use crate::models::invigilators::entities::Invigilator;
        use chrono::{DateTime, Utc};

        Invigilator {
            invigilator_id: self.id,
            name: self.name,
            employee_no: self.employee_no,
            dept: self.dept,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
