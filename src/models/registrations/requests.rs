use serde::Deserialize;
use ts_rs::TS;

// 批量报名请求
//
// 未提供 student_ids 时为全部学生报名（按学生创建顺序）。
// 已存在的报名会被静默跳过。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "registration.ts")]
pub struct RegisterStudentsRequest {
    pub exam_id: i64,
    pub student_ids: Option<Vec<i64>>,
}
