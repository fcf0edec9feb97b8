use serde::Deserialize;
use ts_rs::TS;

// 创建学生请求
//
// 前端表单使用 roll / dept 字段名，同时接受 roll_no / department。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct CreateStudentRequest {
    #[serde(alias = "roll_no")]
    pub roll: String,
    pub name: String,
    #[serde(alias = "department")]
    pub dept: Option<String>,
    pub year: Option<i32>,
}
