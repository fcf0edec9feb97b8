use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct Course {
    // 课程代码
    pub course_code: String,
    // 课程名称
    pub course_title: String,
    // 学分
    pub credits: Option<i32>,
}
