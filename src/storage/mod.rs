use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::{
    courses::entities::Course,
    exams::{entities::Exam, requests::NewExam},
    invigilators::{
        entities::{Availability, InvigilationAssignment, Invigilator},
        requests::{CreateInvigilationRequest, CreateInvigilatorRequest, NewAvailability},
    },
    registrations::{entities::Registration, responses::RegistrationSummary},
    rooms::{entities::Room, requests::CreateRoomRequest},
    seating::{entities::SeatAssignment, responses::SeatingResult},
    students::{entities::Student, requests::CreateStudentRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课程管理方法
    // 列出课程
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// 考试管理方法
    // 创建考试（课程不存在时自动创建）
    async fn create_exam(&self, exam: NewExam) -> Result<Exam>;
    // 通过ID获取考试
    async fn get_exam_by_id(&self, exam_id: i64) -> Result<Option<Exam>>;
    // 列出考试，按考试日期排序
    async fn list_exams(&self) -> Result<Vec<Exam>>;
    // 删除考试，级联删除报名、座位与监考安排
    async fn delete_exam(&self, exam_id: i64) -> Result<bool>;

    /// 考场管理方法
    async fn create_room(&self, room: CreateRoomRequest) -> Result<Room>;
    async fn get_room_by_id(&self, room_id: i64) -> Result<Option<Room>>;
    async fn list_rooms(&self) -> Result<Vec<Room>>;
    async fn delete_room(&self, room_id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 删除学生，级联删除报名与座位
    async fn delete_student(&self, student_id: i64) -> Result<bool>;

    /// 监考老师管理方法
    async fn create_invigilator(&self, invigilator: CreateInvigilatorRequest)
    -> Result<Invigilator>;
    async fn get_invigilator_by_id(&self, invigilator_id: i64) -> Result<Option<Invigilator>>;
    async fn list_invigilators(&self) -> Result<Vec<Invigilator>>;
    async fn delete_invigilator(&self, invigilator_id: i64) -> Result<bool>;

    // 登记空闲时间
    async fn create_availability(
        &self,
        invigilator_id: i64,
        availability: NewAvailability,
    ) -> Result<Availability>;
    async fn list_availability(&self, invigilator_id: i64) -> Result<Vec<Availability>>;
    async fn delete_availability(&self, invigilator_id: i64, avail_id: i64) -> Result<bool>;

    // 监考安排（不检查空闲时间与冲突）
    async fn create_invigilation(
        &self,
        exam_id: i64,
        assignment: CreateInvigilationRequest,
    ) -> Result<InvigilationAssignment>;
    async fn list_invigilation(&self, exam_id: i64) -> Result<Vec<InvigilationAssignment>>;
    async fn delete_invigilation(&self, exam_id: i64, assign_id: i64) -> Result<bool>;

    /// 报名管理方法
    // 批量报名，已报名的学生跳过
    async fn register_students(
        &self,
        exam_id: i64,
        student_ids: Option<Vec<i64>>,
    ) -> Result<RegistrationSummary>;
    // 列出全部报名，按报名顺序
    async fn list_registrations(&self) -> Result<Vec<Registration>>;

    /// 座位管理方法
    // 重新分配座位（整体替换该考试已有的座位）
    async fn assign_seats(&self, exam_id: i64) -> Result<SeatingResult>;
    // 列出某场考试的座位，按考场、座位号排序
    async fn list_seat_assignments(
        &self,
        exam_id: i64,
        room_id: Option<i64>,
    ) -> Result<Vec<SeatAssignment>>;
    // 清空所有考试的座位
    async fn clear_seat_assignments(&self) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

/// 使用指定的数据库配置创建存储（测试与工具使用）
pub async fn create_storage_with(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
