use actix_web::{HttpResponse, Result as ActixResult};

use super::InvigilatorService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn delete_invigilator(
    service: &InvigilatorService,
    invigilator_id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage().delete_invigilator(invigilator_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Invigilator deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::InvigilatorNotFound,
            "Invigilator not found",
        ))),
        Err(e) => Ok(storage_error_response(
            &e,
            ErrorCode::InvigilatorDeleteFailed,
        )),
    }
}
