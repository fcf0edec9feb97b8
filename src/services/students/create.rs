use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;
use crate::utils::validate::{validate_label, validate_required};

pub async fn create_student(
    service: &StudentService,
    mut student: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    student.roll = student.roll.trim().to_string();
    student.name = student.name.trim().to_string();
    student.dept = student
        .dept
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    if let Err(e) = validate_label("roll", &student.roll, 50)
        .and_then(|_| validate_required("name", &student.name))
    {
        return Ok(storage_error_response(&e, ErrorCode::StudentCreationFailed));
    }

    match service.get_storage().create_student(student).await {
        Ok(student) => {
            info!("Student {} ({}) created", student.roll_no, student.student_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student created successfully")))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::StudentCreationFailed)),
    }
}
