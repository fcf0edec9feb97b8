//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod exams;
mod invigilation;
mod invigilators;
mod registrations;
mod rooms;
mod seating;
mod students;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{Result, SeaterError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 按给定数据库配置连接并执行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SeaterError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SeaterError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SeaterError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SeaterError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            // sqlx 的 sqlite::memory: 使用共享缓存，连接池内所有连接看到同一个库
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SeaterError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 课程模块
    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    // 考试模块
    async fn create_exam(&self, exam: NewExam) -> Result<Exam> {
        self.create_exam_impl(exam).await
    }

    async fn get_exam_by_id(&self, exam_id: i64) -> Result<Option<Exam>> {
        self.get_exam_by_id_impl(exam_id).await
    }

    async fn list_exams(&self) -> Result<Vec<Exam>> {
        self.list_exams_impl().await
    }

    async fn delete_exam(&self, exam_id: i64) -> Result<bool> {
        self.delete_exam_impl(exam_id).await
    }

    // 考场模块
    async fn create_room(&self, room: CreateRoomRequest) -> Result<Room> {
        self.create_room_impl(room).await
    }

    async fn get_room_by_id(&self, room_id: i64) -> Result<Option<Room>> {
        self.get_room_by_id_impl(room_id).await
    }

    async fn list_rooms(&self) -> Result<Vec<Room>> {
        self.list_rooms_impl().await
    }

    async fn delete_room(&self, room_id: i64) -> Result<bool> {
        self.delete_room_impl(room_id).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn delete_student(&self, student_id: i64) -> Result<bool> {
        self.delete_student_impl(student_id).await
    }

    // 监考老师模块
    async fn create_invigilator(
        &self,
        invigilator: CreateInvigilatorRequest,
    ) -> Result<Invigilator> {
        self.create_invigilator_impl(invigilator).await
    }

    async fn get_invigilator_by_id(&self, invigilator_id: i64) -> Result<Option<Invigilator>> {
        self.get_invigilator_by_id_impl(invigilator_id).await
    }

    async fn list_invigilators(&self) -> Result<Vec<Invigilator>> {
        self.list_invigilators_impl().await
    }

    async fn delete_invigilator(&self, invigilator_id: i64) -> Result<bool> {
        self.delete_invigilator_impl(invigilator_id).await
    }

    async fn create_availability(
        &self,
        invigilator_id: i64,
        availability: NewAvailability,
    ) -> Result<Availability> {
        self.create_availability_impl(invigilator_id, availability)
            .await
    }

    async fn list_availability(&self, invigilator_id: i64) -> Result<Vec<Availability>> {
        self.list_availability_impl(invigilator_id).await
    }

    async fn delete_availability(&self, invigilator_id: i64, avail_id: i64) -> Result<bool> {
        self.delete_availability_impl(invigilator_id, avail_id)
            .await
    }

    // 监考安排模块
    async fn create_invigilation(
        &self,
        exam_id: i64,
        assignment: CreateInvigilationRequest,
    ) -> Result<InvigilationAssignment> {
        self.create_invigilation_impl(exam_id, assignment).await
    }

    async fn list_invigilation(&self, exam_id: i64) -> Result<Vec<InvigilationAssignment>> {
        self.list_invigilation_impl(exam_id).await
    }

    async fn delete_invigilation(&self, exam_id: i64, assign_id: i64) -> Result<bool> {
        self.delete_invigilation_impl(exam_id, assign_id).await
    }

    // 报名模块
    async fn register_students(
        &self,
        exam_id: i64,
        student_ids: Option<Vec<i64>>,
    ) -> Result<RegistrationSummary> {
        self.register_students_impl(exam_id, student_ids).await
    }

    async fn list_registrations(&self) -> Result<Vec<Registration>> {
        self.list_registrations_impl().await
    }

    // 座位模块
    async fn assign_seats(&self, exam_id: i64) -> Result<SeatingResult> {
        self.assign_seats_impl(exam_id).await
    }

    async fn list_seat_assignments(
        &self,
        exam_id: i64,
        room_id: Option<i64>,
    ) -> Result<Vec<SeatAssignment>> {
        self.list_seat_assignments_impl(exam_id, room_id).await
    }

    async fn clear_seat_assignments(&self) -> Result<u64> {
        self.clear_seat_assignments_impl().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("examseater.db").unwrap(),
            "sqlite://examseater.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://localhost/exams").unwrap(),
            "postgres://localhost/exams"
        );
    }

    #[test]
    fn test_bare_memory_url_uses_shared_memory_database() {
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
    }

    #[tokio::test]
    async fn test_memory_database_shared_across_pool() {
        let config = DatabaseConfig {
            url: ":memory:".to_string(),
            pool_size: 4,
            timeout: 5,
        };
        let storage = SeaOrmStorage::connect(&config).await.unwrap();

        // 同时占用多个连接，每个连接都应看到迁移后的表
        let (a, b, c, d) = tokio::join!(
            storage.list_rooms_impl(),
            storage.list_exams_impl(),
            storage.list_students_impl(),
            storage.list_courses_impl(),
        );
        assert!(a.unwrap().is_empty());
        assert!(b.unwrap().is_empty());
        assert!(c.unwrap().is_empty());
        assert!(d.unwrap().is_empty());
    }

    #[test]
    fn test_build_database_url_rejects_unknown_scheme() {
        let err = SeaOrmStorage::build_database_url("redis://localhost").unwrap_err();
        assert_eq!(err.code(), "E001");
    }
}
