use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct Student {
    pub student_id: i64,
    // 学号
    pub roll_no: String,
    pub name: String,
    pub department: Option<String>,
    // 年级
    pub year: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
