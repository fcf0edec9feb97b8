//! 监考老师空闲时间
//!
//! 仅做登记，安排监考时不检查。

use actix_web::{HttpResponse, Result as ActixResult};

use super::InvigilatorService;
use crate::models::invigilators::requests::{CreateAvailabilityRequest, NewAvailability};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;
use crate::utils::validate::{parse_date, parse_time_range};

pub async fn add_availability(
    service: &InvigilatorService,
    invigilator_id: i64,
    slot: CreateAvailabilityRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage();

    let parsed = parse_date("date", &slot.date).and_then(|date| {
        parse_time_range(&slot.start_time, &slot.end_time).map(|(start_time, end_time)| {
            NewAvailability {
                date,
                start_time,
                end_time,
            }
        })
    });
    let availability = match parsed {
        Ok(a) => a,
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::InternalServerError)),
    };

    if let Some(resp) = ensure_invigilator(service, invigilator_id).await {
        return Ok(resp);
    }

    match storage
        .create_availability(invigilator_id, availability)
        .await
    {
        Ok(slot) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(slot, "Availability recorded successfully"))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::InternalServerError)),
    }
}

pub async fn list_availability(
    service: &InvigilatorService,
    invigilator_id: i64,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = ensure_invigilator(service, invigilator_id).await {
        return Ok(resp);
    }

    match service.get_storage().list_availability(invigilator_id).await {
        Ok(slots) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            slots,
            "Availability retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::InternalServerError)),
    }
}

pub async fn delete_availability(
    service: &InvigilatorService,
    invigilator_id: i64,
    avail_id: i64,
) -> ActixResult<HttpResponse> {
    match service
        .get_storage()
        .delete_availability(invigilator_id, avail_id)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Availability deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AvailabilityNotFound,
            "Availability not found",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::InternalServerError)),
    }
}

/// 监考老师不存在时返回 404 响应
async fn ensure_invigilator(
    service: &InvigilatorService,
    invigilator_id: i64,
) -> Option<HttpResponse> {
    match service
        .get_storage()
        .get_invigilator_by_id(invigilator_id)
        .await
    {
        Ok(Some(_)) => None,
        Ok(None) => Some(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::InvigilatorNotFound,
            "Invigilator not found",
        ))),
        Err(e) => Some(storage_error_response(&e, ErrorCode::InternalServerError)),
    }
}
