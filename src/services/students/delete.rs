use actix_web::{HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

// 报名与座位记录由数据库级联删除
pub async fn delete_student(service: &StudentService, student_id: i64) -> ActixResult<HttpResponse> {
    match service.get_storage().delete_student(student_id).await {
        Ok(true) => Ok(
            HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted successfully"))
        ),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::StudentDeleteFailed)),
    }
}
