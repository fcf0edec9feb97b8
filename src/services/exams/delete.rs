use actix_web::{HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn delete_exam(service: &ExamService, exam_id: i64) -> ActixResult<HttpResponse> {
    match service.get_storage().delete_exam(exam_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Exam deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::ExamDeleteFailed)),
    }
}
