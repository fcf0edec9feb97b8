use std::collections::BTreeMap;

use actix_web::{HttpResponse, Result as ActixResult};

use super::StateService;
use crate::errors::Result;
use crate::models::state::responses::StateDump;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn dump_state(service: &StateService) -> ActixResult<HttpResponse> {
    match load_state(service).await {
        Ok(state) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            state,
            "State retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::InternalServerError)),
    }
}

async fn load_state(service: &StateService) -> Result<StateDump> {
    let storage = service.get_storage();

    let courses = storage.list_courses().await?;
    let exams = storage.list_exams().await?;
    let rooms = storage.list_rooms().await?;
    let students = storage.list_students().await?;
    let invigilators = storage.list_invigilators().await?;

    // 只有存在报名的考试才有条目
    let mut regs: BTreeMap<String, Vec<i64>> = BTreeMap::new();
    for reg in storage.list_registrations().await? {
        regs.entry(reg.exam_id.to_string())
            .or_default()
            .push(reg.student_id);
    }

    Ok(StateDump {
        courses,
        exams,
        rooms,
        students,
        invigilators,
        regs,
    })
}
