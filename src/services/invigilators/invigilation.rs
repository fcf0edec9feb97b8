//! 监考安排
//!
//! 不检查监考老师的空闲时间，也不检查同一时间的重复安排。

use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use super::InvigilatorService;
use crate::models::invigilators::requests::CreateInvigilationRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn assign_invigilator(
    service: &InvigilatorService,
    exam_id: i64,
    assignment: CreateInvigilationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage();

    // 依次确认考试、考场、监考老师存在
    let exam = storage.get_exam_by_id(exam_id).await;
    let room = storage.get_room_by_id(assignment.room_id).await;
    let invigilator = storage
        .get_invigilator_by_id(assignment.invigilator_id)
        .await;

    let missing = match (exam, room, invigilator) {
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            return Ok(storage_error_response(&e, ErrorCode::InternalServerError));
        }
        (Ok(None), _, _) => Some((ErrorCode::ExamNotFound, "Exam not found")),
        (_, Ok(None), _) => Some((ErrorCode::RoomNotFound, "Room not found")),
        (_, _, Ok(None)) => Some((ErrorCode::InvigilatorNotFound, "Invigilator not found")),
        _ => None,
    };
    if let Some((code, message)) = missing {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(code, message)));
    }

    match storage.create_invigilation(exam_id, assignment).await {
        Ok(assignment) => {
            info!(
                "Invigilator {} assigned to exam {} in room {}",
                assignment.invigilator_id, assignment.exam_id, assignment.room_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                assignment,
                "Invigilator assigned successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::InternalServerError)),
    }
}

pub async fn list_invigilation(
    service: &InvigilatorService,
    exam_id: i64,
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

    match storage.list_invigilation(exam_id).await {
        Ok(assignments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignments,
            "Invigilation retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::InternalServerError)),
    }
}

pub async fn delete_invigilation(
    service: &InvigilatorService,
    exam_id: i64,
    assign_id: i64,
) -> ActixResult<HttpResponse> {
    match service
        .get_storage()
        .delete_invigilation(exam_id, assign_id)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Invigilation deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::InvigilationNotFound,
            "Invigilation assignment not found",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::InternalServerError)),
    }
}
