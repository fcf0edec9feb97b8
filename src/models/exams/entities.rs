use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "exam.ts")]
pub struct Exam {
    // 考试ID
    pub exam_id: i64,
    // 课程代码
    pub course_code: String,
    // 课程名称（冗余存储，便于展示）
    pub course_title: Option<String>,
    // 考试日期
    pub exam_date: chrono::NaiveDate,
    // 开始时间
    pub start_time: chrono::NaiveTime,
    // 结束时间
    pub end_time: chrono::NaiveTime,
    // 考场备注
    pub venue_note: Option<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}
