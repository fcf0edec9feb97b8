use actix_web::{HttpResponse, Result as ActixResult};

use super::SeatingService;
use crate::models::seating::requests::SeatListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn list_seats(
    service: &SeatingService,
    exam_id: i64,
    query: SeatListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage();

    match storage.get_exam_by_id(exam_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamNotFound,
                "Exam not found",
            )));
        }
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::InternalServerError)),
    }

    match storage.list_seat_assignments(exam_id, query.room_id).await {
        Ok(seats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            seats,
            "Seats retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::InternalServerError)),
    }
}
