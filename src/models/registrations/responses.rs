use serde::Serialize;
use ts_rs::TS;

// 批量报名结果
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "registration.ts")]
pub struct RegistrationSummary {
    pub exam_id: i64,
    // 本次请求涉及的学生数
    pub requested: usize,
    // 新增报名数
    pub registered: usize,
    // 已报名而跳过的数量
    pub skipped: usize,
}
