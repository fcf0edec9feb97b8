use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::rooms::requests::CreateRoomRequest;
use crate::services::RoomService;

// HTTP处理程序
pub async fn create_room(
    service: web::Data<RoomService>,
    room_data: web::Json<CreateRoomRequest>,
) -> ActixResult<HttpResponse> {
    service.create_room(room_data.into_inner()).await
}

pub async fn delete_room(
    service: web::Data<RoomService>,
    room_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    service.delete_room(room_id.into_inner()).await
}

// 配置路由
pub fn configure_rooms_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/rooms")
            .service(web::resource("").route(web::post().to(create_room)))
            .service(web::resource("/{room_id}").route(web::delete().to(delete_room))),
    );
}
