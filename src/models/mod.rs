//! 数据模型定义
//!
//! - `entities`: 对外暴露的视图结构
//! - `requests`: 请求体与存储层入参
//! - `responses`: 聚合响应

pub mod common;
pub mod courses;
pub mod exams;
pub mod invigilators;
pub mod registrations;
pub mod rooms;
pub mod seating;
pub mod state;
pub mod students;

pub use common::{ApiResponse, ErrorCode};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
