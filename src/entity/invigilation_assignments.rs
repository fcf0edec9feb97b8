//! 监考安排实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "invigilation_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub exam_id: i64,
    pub room_id: i64,
    pub invigilator_id: i64,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exams::Entity",
        from = "Column::ExamId",
        to = "super::exams::Column::Id"
    )]
    Exam,
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::Id"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::invigilators::Entity",
        from = "Column::InvigilatorId",
        to = "super::invigilators::Column::Id"
    )]
    Invigilator,
}

impl Related<super::exams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::invigilators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invigilator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_invigilation(self) -> crate::models::invigilators::entities::InvigilationAssignment {
        crate::models::invigilators::entities::InvigilationAssignment {
            assign_id: self.id,
            exam_id: self.exam_id,
            room_id: self.room_id,
            invigilator_id: self.invigilator_id,
            role: self.role,
        }
    }
}
