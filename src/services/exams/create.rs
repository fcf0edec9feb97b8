use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use super::ExamService;
use crate::errors::Result;
use crate::models::exams::requests::{CreateExamRequest, NewExam};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;
use crate::utils::validate::{parse_date, parse_time_range, validate_code};

pub async fn create_exam(
    service: &ExamService,
    exam: CreateExamRequest,
) -> ActixResult<HttpResponse> {
    let new_exam = match parse_exam(exam) {
        Ok(exam) => exam,
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::ExamCreationFailed)),
    };

    match service.get_storage().create_exam(new_exam).await {
        Ok(exam) => {
            info!(
                "Exam {} created for course {} on {}",
                exam.exam_id, exam.course_code, exam.exam_date
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(exam, "Exam created successfully")))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::ExamCreationFailed)),
    }
}

/// 校验并解析考试请求，课程名称缺省为课程代码
fn parse_exam(exam: CreateExamRequest) -> Result<NewExam> {
    let course_code = exam.course_code.trim().to_string();
    validate_code("course_code", &course_code, 20)?;

    let exam_date = parse_date("exam_date", &exam.exam_date)?;
    let (start_time, end_time) = parse_time_range(&exam.start_time, &exam.end_time)?;

    let course_title = exam
        .course_title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| course_code.clone());

    Ok(NewExam {
        course_code,
        course_title,
        exam_date,
        start_time,
        end_time,
        venue_note: exam.venue_note.filter(|n| !n.trim().is_empty()),
    })
}
