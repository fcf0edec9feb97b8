use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::registrations::requests::RegisterStudentsRequest;
use crate::services::RegistrationService;

pub async fn register_students(
    service: web::Data<RegistrationService>,
    request: web::Json<RegisterStudentsRequest>,
) -> ActixResult<HttpResponse> {
    service.register_students(request.into_inner()).await
}

// 配置路由
pub fn configure_registrations_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/v1/registrations").route(web::post().to(register_students)));
}
