//! 考场实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub room_code: String,
    pub capacity: i32,
    pub building: Option<String>,
    pub floor: Option<i32>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seat_assignments::Entity")]
    SeatAssignments,
    #[sea_orm(has_many = "super::invigilation_assignments::Entity")]
    InvigilationAssignments,
}

impl Related<super::seat_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatAssignments.def()
    }
}

impl Related<super::invigilation_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvigilationAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_room(self) -> crate::models::rooms::entities::Room {
        use crate::models::rooms::entities::Room;
        use chrono::{DateTime, Utc};

        Room {
            room_id: self.id,
            room_code: self.room_code,
            capacity: self.capacity,
            building: self.building,
            floor: self.floor,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
