use actix_web::{HttpResponse, Result as ActixResult};

use super::RoomService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn delete_room(service: &RoomService, room_id: i64) -> ActixResult<HttpResponse> {
    match service.get_storage().delete_room(room_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Room deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RoomNotFound,
            "Room not found",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::RoomDeleteFailed)),
    }
}
