pub mod create;
pub mod delete;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::rooms::requests::CreateRoomRequest;
use crate::storage::Storage;

pub struct RoomService {
    storage: Arc<dyn Storage>,
}

impl RoomService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 创建考场
    pub async fn create_room(&self, room: CreateRoomRequest) -> ActixResult<HttpResponse> {
        create::create_room(self, room).await
    }

    // 删除考场
    pub async fn delete_room(&self, room_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_room(self, room_id).await
    }
}
