use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 座位分配记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "seating.ts")]
pub struct SeatAssignment {
    pub seat_id: i64,
    pub exam_id: i64,
    pub room_id: i64,
    pub student_id: i64,
    pub seat_number: i32,
    pub assigned_at: chrono::DateTime<chrono::Utc>,
}

// 座位表中的学生摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "seating.ts")]
pub struct SeatedStudent {
    pub student_id: i64,
    pub roll_no: String,
    pub name: String,
}
