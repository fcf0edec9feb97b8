use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use crate::models::{
    courses::entities::Course, exams::entities::Exam, invigilators::entities::Invigilator,
    rooms::entities::Room, students::entities::Student,
};

// 全量状态（供仪表盘使用）
//
// regs: 考试ID（字符串键）→ 报名学生ID列表，按报名顺序
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "state.ts")]
pub struct StateDump {
    pub courses: Vec<Course>,
    pub exams: Vec<Exam>,
    pub rooms: Vec<Room>,
    pub students: Vec<Student>,
    pub invigilators: Vec<Invigilator>,
    pub regs: BTreeMap<String, Vec<i64>>,
}

// 导出快照
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "state.ts")]
pub struct ExportSnapshot {
    pub courses: Vec<Course>,
    pub exams: Vec<ExportExam>,
    pub rooms: Vec<ExportRoom>,
    pub students: Vec<ExportStudent>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "state.ts")]
pub struct ExportExam {
    pub exam_id: i64,
    pub course_code: String,
    pub exam_date: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "state.ts")]
pub struct ExportRoom {
    pub room_id: i64,
    pub room_code: String,
    pub capacity: i32,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "state.ts")]
pub struct ExportStudent {
    pub student_id: i64,
    pub roll_no: String,
    pub name: String,
}

impl From<&Exam> for ExportExam {
    fn from(exam: &Exam) -> Self {
        Self {
            exam_id: exam.exam_id,
            course_code: exam.course_code.clone(),
            exam_date: exam.exam_date.to_string(),
        }
    }
}

impl From<&Room> for ExportRoom {
    fn from(room: &Room) -> Self {
        Self {
            room_id: room.room_id,
            room_code: room.room_code.clone(),
            capacity: room.capacity,
        }
    }
}

impl From<&Student> for ExportStudent {
    fn from(student: &Student) -> Self {
        Self {
            student_id: student.student_id,
            roll_no: student.roll_no.clone(),
            name: student.name.clone(),
        }
    }
}
