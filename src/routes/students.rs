use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::students::requests::CreateStudentRequest;
use crate::services::StudentService;

// HTTP处理程序
pub async fn create_student(
    service: web::Data<StudentService>,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    service.create_student(student_data.into_inner()).await
}

pub async fn delete_student(
    service: web::Data<StudentService>,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    service.delete_student(student_id.into_inner()).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .service(web::resource("").route(web::post().to(create_student)))
            .service(web::resource("/{student_id}").route(web::delete().to(delete_student))),
    );
}
