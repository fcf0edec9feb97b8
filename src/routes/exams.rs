use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{invigilators, seating};
use crate::models::exams::requests::CreateExamRequest;
use crate::services::ExamService;

// HTTP处理程序
pub async fn create_exam(
    service: web::Data<ExamService>,
    exam_data: web::Json<CreateExamRequest>,
) -> ActixResult<HttpResponse> {
    service.create_exam(exam_data.into_inner()).await
}

pub async fn delete_exam(
    service: web::Data<ExamService>,
    exam_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    service.delete_exam(exam_id.into_inner()).await
}

// 配置路由
//
// 座位与监考安排都以考试为上级资源，统一挂在同一个 scope 下。
pub fn configure_exams_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/exams")
            .service(web::resource("").route(web::post().to(create_exam)))
            .service(web::resource("/{exam_id}").route(web::delete().to(delete_exam)))
            .service(
                web::resource("/{exam_id}/seats")
                    .route(web::post().to(seating::assign_seats))
                    .route(web::get().to(seating::list_seats)),
            )
            .service(
                web::resource("/{exam_id}/invigilation")
                    .route(web::post().to(invigilators::assign_invigilator))
                    .route(web::get().to(invigilators::list_invigilation)),
            )
            .service(
                web::resource("/{exam_id}/invigilation/{assign_id}")
                    .route(web::delete().to(invigilators::delete_invigilation)),
            ),
    );
}
