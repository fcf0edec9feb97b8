use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use super::RegistrationService;
use crate::models::registrations::requests::RegisterStudentsRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn register_students(
    service: &RegistrationService,
    request: RegisterStudentsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage();
    let exam_id = request.exam_id;

    match storage.get_exam_by_id(exam_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamNotFound,
                "Exam not found",
            )));
        }
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::RegistrationFailed)),
    }

    match storage.register_students(exam_id, request.student_ids).await {
        Ok(summary) => {
            info!(
                "Exam {}: {} registered, {} already present",
                exam_id, summary.registered, summary.skipped
            );
            let message = format!("{} students registered", summary.registered);
            Ok(HttpResponse::Ok().json(ApiResponse::success(summary, message)))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::RegistrationFailed)),
    }
}
