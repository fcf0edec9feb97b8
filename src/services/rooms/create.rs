use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use super::RoomService;
use crate::models::rooms::requests::CreateRoomRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;
use crate::utils::validate::{validate_capacity, validate_label};

pub async fn create_room(
    service: &RoomService,
    mut room: CreateRoomRequest,
) -> ActixResult<HttpResponse> {
    room.room_code = room.room_code.trim().to_string();
    room.building = room
        .building
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty());

    if let Err(e) = validate_label("room_code", &room.room_code, 50)
        .and_then(|_| validate_capacity(room.capacity))
    {
        return Ok(storage_error_response(&e, ErrorCode::RoomCreationFailed));
    }

    match service.get_storage().create_room(room).await {
        Ok(room) => {
            info!(
                "Room {} created with capacity {}",
                room.room_code, room.capacity
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(room, "Room created successfully")))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::RoomCreationFailed)),
    }
}
