use actix_web::{HttpResponse, Result as ActixResult};

use super::SeatingService;
use crate::errors::SeaterError;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn assign_seats(service: &SeatingService, exam_id: i64) -> ActixResult<HttpResponse> {
    match service.get_storage().assign_seats(exam_id).await {
        Ok(result) => {
            let message = match &result.warning {
                Some(warning) => warning.clone(),
                None => "Seats assigned".to_string(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(result, message)))
        }
        Err(SeaterError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::ExamNotFound, msg))),
        Err(SeaterError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::NoRegistrations, msg))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::SeatAssignmentFailed)),
    }
}
