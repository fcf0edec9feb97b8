//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub roll_no: String,
    pub name: String,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_exams::Entity")]
    StudentExams,
    #[sea_orm(has_many = "super::seat_assignments::Entity")]
    SeatAssignments,
}

impl Related<super::student_exams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentExams.def()
    }
}

impl Related<super::seat_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::Student;
        use chrono::{DateTime, Utc};

        Student {
            student_id: self.id,
            roll_no: self.roll_no,
            name: self.name,
            department: self.department,
            year: self.year,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }

    /// 座位表中展示的学生摘要
    pub fn into_seated_student(self) -> crate::models::seating::entities::SeatedStudent {
        crate::models::seating::entities::SeatedStudent {
            student_id: self.id,
            roll_no: self.roll_no,
            name: self.name,
        }
    }
}
