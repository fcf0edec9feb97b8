use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "invigilator.ts")]
pub struct Invigilator {
    pub invigilator_id: i64,
    pub name: String,
    // 工号
    pub employee_no: Option<String>,
    pub dept: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 监考老师空闲时间段
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "invigilator.ts")]
pub struct Availability {
    pub avail_id: i64,
    pub invigilator_id: i64,
    pub date: chrono::NaiveDate,
    pub start_time: chrono::NaiveTime,
    pub end_time: chrono::NaiveTime,
}

// 监考安排（考试 + 考场 + 监考老师）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "invigilator.ts")]
pub struct InvigilationAssignment {
    pub assign_id: i64,
    pub exam_id: i64,
    pub room_id: i64,
    pub invigilator_id: i64,
    pub role: String,
}
