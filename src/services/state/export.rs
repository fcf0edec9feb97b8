use actix_web::{HttpResponse, Result as ActixResult};

use super::StateService;
use crate::errors::Result;
use crate::models::state::responses::{ExportExam, ExportRoom, ExportSnapshot, ExportStudent};
use crate::models::ErrorCode;
use crate::services::storage_error_response;

/// 导出课程、考试、考场、学生的 JSON 快照，作为附件下载
pub async fn export_state(service: &StateService) -> ActixResult<HttpResponse> {
    let body = match build_snapshot(service).await.and_then(|snapshot| {
        serde_json::to_string_pretty(&snapshot).map_err(Into::into)
    }) {
        Ok(body) => body,
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::ExportFailed)),
    };

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", service.export_file_name),
        ))
        .body(body))
}

async fn build_snapshot(service: &StateService) -> Result<ExportSnapshot> {
    let storage = service.get_storage();

    let courses = storage.list_courses().await?;
    let exams = storage.list_exams().await?;
    let rooms = storage.list_rooms().await?;
    let students = storage.list_students().await?;

    Ok(ExportSnapshot {
        courses,
        exams: exams.iter().map(ExportExam::from).collect(),
        rooms: rooms.iter().map(ExportRoom::from).collect(),
        students: students.iter().map(ExportStudent::from).collect(),
    })
}
