//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的视图结构。

pub mod courses;
pub mod exams;
pub mod invigilation_assignments;
pub mod invigilator_availability;
pub mod invigilators;
pub mod rooms;
pub mod seat_assignments;
pub mod student_exams;
pub mod students;
