use serde::Deserialize;
use ts_rs::TS;

// 创建监考老师请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "invigilator.ts")]
pub struct CreateInvigilatorRequest {
    pub name: String,
    #[serde(alias = "employee_no")]
    pub emp: Option<String>,
    pub dept: Option<String>,
}

// 登记空闲时间请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "invigilator.ts")]
pub struct CreateAvailabilityRequest {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

// 已解析的空闲时间（用于存储层）
#[derive(Debug, Clone)]
pub struct NewAvailability {
    pub date: chrono::NaiveDate,
    pub start_time: chrono::NaiveTime,
    pub end_time: chrono::NaiveTime,
}

// 安排监考请求，role 缺省为 invigilator
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "invigilator.ts")]
pub struct CreateInvigilationRequest {
    pub room_id: i64,
    pub invigilator_id: i64,
    pub role: Option<String>,
}

pub const DEFAULT_INVIGILATION_ROLE: &str = "invigilator";
