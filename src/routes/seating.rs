use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::seating::requests::SeatListQuery;
use crate::services::SeatingService;

// 以下两个处理程序挂在 /api/v1/exams 下
pub async fn assign_seats(
    service: web::Data<SeatingService>,
    exam_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    service.assign_seats(exam_id.into_inner()).await
}

pub async fn list_seats(
    service: web::Data<SeatingService>,
    exam_id: web::Path<i64>,
    query: web::Query<SeatListQuery>,
) -> ActixResult<HttpResponse> {
    service
        .list_seats(exam_id.into_inner(), query.into_inner())
        .await
}

pub async fn clear_seats(service: web::Data<SeatingService>) -> ActixResult<HttpResponse> {
    service.clear_seats().await
}

// 配置路由
pub fn configure_seating_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/v1/seats").route(web::delete().to(clear_seats)));
}
