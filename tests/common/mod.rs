#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use exam_seater::config::DatabaseConfig;
use exam_seater::models::exams::{entities::Exam, requests::NewExam};
use exam_seater::models::registrations::entities::Registration;
use exam_seater::models::rooms::{entities::Room, requests::CreateRoomRequest};
use exam_seater::models::students::{entities::Student, requests::CreateStudentRequest};
use exam_seater::storage::{Storage, create_storage_with};

/// 每次调用得到一个独立的内存数据库
pub async fn memory_storage() -> Arc<dyn Storage> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    create_storage_with(&config)
        .await
        .expect("in-memory storage should start")
}

pub async fn add_room(storage: &Arc<dyn Storage>, code: &str, capacity: i32) -> Room {
    storage
        .create_room(CreateRoomRequest {
            room_code: code.to_string(),
            capacity,
            building: None,
            floor: None,
        })
        .await
        .expect("room should be created")
}

pub async fn add_student(storage: &Arc<dyn Storage>, roll: &str) -> Student {
    storage
        .create_student(CreateStudentRequest {
            roll: roll.to_string(),
            name: format!("Student {roll}"),
            dept: None,
            year: None,
        })
        .await
        .expect("student should be created")
}

pub async fn add_students(storage: &Arc<dyn Storage>, count: usize) -> Vec<Student> {
    let mut students = Vec::with_capacity(count);
    for i in 1..=count {
        students.push(add_student(storage, &format!("R{i:03}")).await);
    }
    students
}

pub async fn add_exam(storage: &Arc<dyn Storage>, course_code: &str) -> Exam {
    storage
        .create_exam(NewExam {
            course_code: course_code.to_string(),
            course_title: format!("{course_code} title"),
            exam_date: NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date"),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).expect("valid time"),
            venue_note: None,
        })
        .await
        .expect("exam should be created")
}

/// 某场考试的报名记录，按报名顺序
pub async fn exam_registrations(storage: &Arc<dyn Storage>, exam_id: i64) -> Vec<Registration> {
    storage
        .list_registrations()
        .await
        .expect("registrations should load")
        .into_iter()
        .filter(|r| r.exam_id == exam_id)
        .collect()
}
