//! 考场存储操作

use super::SeaOrmStorage;
use crate::entity::rooms::{ActiveModel, Column, Entity as Rooms};
use crate::errors::{Result, SeaterError};
use crate::models::rooms::{entities::Room, requests::CreateRoomRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建考场
    pub async fn create_room_impl(&self, req: CreateRoomRequest) -> Result<Room> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            room_code: Set(req.room_code),
            capacity: Set(req.capacity),
            building: Set(req.building),
            floor: Set(req.floor),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("创建考场失败", e))?;

        Ok(result.into_room())
    }

    /// 通过 ID 获取考场
    pub async fn get_room_by_id_impl(&self, room_id: i64) -> Result<Option<Room>> {
        let result = Rooms::find_by_id(room_id)
            .one(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("查询考场失败", e))?;

        Ok(result.map(|m| m.into_room()))
    }

    /// 列出考场
    pub async fn list_rooms_impl(&self) -> Result<Vec<Room>> {
        let rooms = Rooms::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("查询考场列表失败", e))?;

        Ok(rooms.into_iter().map(|m| m.into_room()).collect())
    }

    /// 删除考场
    pub async fn delete_room_impl(&self, room_id: i64) -> Result<bool> {
        let result = Rooms::delete_by_id(room_id)
            .exec(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("删除考场失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
