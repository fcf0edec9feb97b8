use actix_web::{HttpResponse, Result as ActixResult, middleware, web};

use crate::services::StateService;

pub async fn dump_state(service: web::Data<StateService>) -> ActixResult<HttpResponse> {
    service.dump_state().await
}

pub async fn export_state(service: web::Data<StateService>) -> ActixResult<HttpResponse> {
    service.export_state().await
}

// 配置路由
pub fn configure_state_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/state")
            .wrap(middleware::Compress::default())
            .route(web::get().to(dump_state)),
    )
    .service(web::resource("/api/v1/export").route(web::get().to(export_state)));
}
