use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use super::SeatingService;
use crate::models::seating::responses::ClearSeatsResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn clear_seats(service: &SeatingService) -> ActixResult<HttpResponse> {
    match service.get_storage().clear_seat_assignments().await {
        Ok(removed) => {
            info!("Cleared {} seat assignments", removed);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ClearSeatsResponse { removed },
                "All seat assignments cleared",
            )))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::InternalServerError)),
    }
}
