//! 考试实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_code: String,
    pub course_title: Option<String>,
    pub exam_date: chrono::NaiveDate,
    pub start_time: chrono::NaiveTime,
    pub end_time: chrono::NaiveTime,
    pub venue_note: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseCode",
        to = "super::courses::Column::Code"
    )]
    Course,
    #[sea_orm(has_many = "super::student_exams::Entity")]
    StudentExams,
    #[sea_orm(has_many = "super::seat_assignments::Entity")]
    SeatAssignments,
    #[sea_orm(has_many = "super::invigilation_assignments::Entity")]
    InvigilationAssignments,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
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

impl Related<super::invigilation_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvigilationAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_exam(self) -> crate::models::exams::entities::Exam {
        use crate::models::exams::entities::Exam;
        use chrono::{DateTime, Utc};

        Exam {
            exam_id: self.id,
            course_code: self.course_code,
            course_title: self.course_title,
            exam_date: self.exam_date,
            start_time: self.start_time,
            end_time: self.end_time,
            venue_note: self.venue_note,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
