use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const STATUS_REGISTERED: &str = "registered";

// 考试报名记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "registration.ts")]
pub struct Registration {
    pub registration_id: i64,
    pub student_id: i64,
    pub exam_id: i64,
    pub status: String,
    pub registered_at: chrono::DateTime<chrono::Utc>,
}
