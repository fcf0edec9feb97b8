pub mod exams;
pub mod invigilators;
pub mod registrations;
pub mod rooms;
pub mod seating;
pub mod state;
pub mod students;

pub use exams::ExamService;
pub use invigilators::InvigilatorService;
pub use registrations::RegistrationService;
pub use rooms::RoomService;
pub use seating::SeatingService;
pub use state::StateService;
pub use students::StudentService;

use actix_web::{HttpResponse, web};
use std::sync::Arc;
use tracing::error;

use crate::config::ExportConfig;
use crate::errors::SeaterError;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 将各业务服务注册为 app_data，共享同一个存储句柄
pub fn configure_service_data(
    cfg: &mut web::ServiceConfig,
    storage: &Arc<dyn Storage>,
    export: &ExportConfig,
) {
    cfg.app_data(web::Data::new(RoomService::new(storage.clone())))
        .app_data(web::Data::new(ExamService::new(storage.clone())))
        .app_data(web::Data::new(StudentService::new(storage.clone())))
        .app_data(web::Data::new(InvigilatorService::new(storage.clone())))
        .app_data(web::Data::new(RegistrationService::new(storage.clone())))
        .app_data(web::Data::new(SeatingService::new(storage.clone())))
        .app_data(web::Data::new(StateService::new(
            storage.clone(),
            export.file_name.clone(),
        )));
}

/// 存储层错误 → HTTP 响应
///
/// `code` 仅用于服务器错误，其余错误种类使用通用错误码。
pub(crate) fn storage_error_response(err: &SeaterError, code: ErrorCode) -> HttpResponse {
    match err {
        SeaterError::Validation(msg) | SeaterError::DateParse(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)),
        SeaterError::Reference(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)),
        SeaterError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, msg))
        }
        SeaterError::Conflict(msg) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(ErrorCode::Conflict, msg))
        }
        _ => {
            error!("{}", err.format_simple());
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(code, err.message()))
        }
    }
}
