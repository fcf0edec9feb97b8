use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::invigilators::requests::{
    CreateAvailabilityRequest, CreateInvigilationRequest, CreateInvigilatorRequest,
};
use crate::services::InvigilatorService;

// HTTP处理程序
pub async fn create_invigilator(
    service: web::Data<InvigilatorService>,
    invigilator_data: web::Json<CreateInvigilatorRequest>,
) -> ActixResult<HttpResponse> {
    service
        .create_invigilator(invigilator_data.into_inner())
        .await
}

pub async fn delete_invigilator(
    service: web::Data<InvigilatorService>,
    invigilator_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    service.delete_invigilator(invigilator_id.into_inner()).await
}

pub async fn add_availability(
    service: web::Data<InvigilatorService>,
    invigilator_id: web::Path<i64>,
    slot: web::Json<CreateAvailabilityRequest>,
) -> ActixResult<HttpResponse> {
    service
        .add_availability(invigilator_id.into_inner(), slot.into_inner())
        .await
}

pub async fn list_availability(
    service: web::Data<InvigilatorService>,
    invigilator_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    service.list_availability(invigilator_id.into_inner()).await
}

pub async fn delete_availability(
    service: web::Data<InvigilatorService>,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (invigilator_id, avail_id) = path.into_inner();
    service.delete_availability(invigilator_id, avail_id).await
}

// 以下处理程序挂在 /api/v1/exams 下
pub async fn assign_invigilator(
    service: web::Data<InvigilatorService>,
    exam_id: web::Path<i64>,
    assignment: web::Json<CreateInvigilationRequest>,
) -> ActixResult<HttpResponse> {
    service
        .assign_invigilator(exam_id.into_inner(), assignment.into_inner())
        .await
}

pub async fn list_invigilation(
    service: web::Data<InvigilatorService>,
    exam_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    service.list_invigilation(exam_id.into_inner()).await
}

pub async fn delete_invigilation(
    service: web::Data<InvigilatorService>,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (exam_id, assign_id) = path.into_inner();
    service.delete_invigilation(exam_id, assign_id).await
}

// 配置路由
pub fn configure_invigilators_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/invigilators")
            .service(web::resource("").route(web::post().to(create_invigilator)))
            .service(
                web::resource("/{invigilator_id}").route(web::delete().to(delete_invigilator)),
            )
            .service(
                web::resource("/{invigilator_id}/availability")
                    .route(web::get().to(list_availability))
                    .route(web::post().to(add_availability)),
            )
            .service(
                web::resource("/{invigilator_id}/availability/{avail_id}")
                    .route(web::delete().to(delete_availability)),
            ),
    );
}
