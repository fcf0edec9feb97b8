use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use super::InvigilatorService;
use crate::models::invigilators::requests::CreateInvigilatorRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;
use crate::utils::validate::{validate_label, validate_required};

pub async fn create_invigilator(
    service: &InvigilatorService,
    mut invigilator: CreateInvigilatorRequest,
) -> ActixResult<HttpResponse> {
    invigilator.name = invigilator.name.trim().to_string();
    // 工号为空视为未填写，避免唯一约束冲突
    invigilator.emp = invigilator
        .emp
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());
    invigilator.dept = invigilator
        .dept
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let validation = validate_required("name", &invigilator.name).and_then(|_| {
        invigilator
            .emp
            .as_deref()
            .map_or(Ok(()), |emp| validate_label("emp", emp, 100))
    });
    if let Err(e) = validation {
        return Ok(storage_error_response(
            &e,
            ErrorCode::InvigilatorCreationFailed,
        ));
    }

    match service.get_storage().create_invigilator(invigilator).await {
        Ok(invigilator) => {
            info!(
                "Invigilator {} ({}) created",
                invigilator.name, invigilator.invigilator_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                invigilator,
                "Invigilator created successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(
            &e,
            ErrorCode::InvigilatorCreationFailed,
        )),
    }
}
