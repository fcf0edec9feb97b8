//! Exam Seater - 考试安排与座位分配服务
//!
//! 基于 Actix Web 构建，管理考场、考试、学生与监考老师，
//! 并按考场容量为考试报名学生分配座位。
//!
//! # 架构
//! - `allocator`: 座位分配算法（纯函数）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 校验与参数错误处理

pub mod allocator;
pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
