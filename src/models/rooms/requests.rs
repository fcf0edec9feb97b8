use serde::Deserialize;
use ts_rs::TS;

// 创建考场请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "room.ts")]
pub struct CreateRoomRequest {
    pub room_code: String,
    pub capacity: i32,
    pub building: Option<String>,
    pub floor: Option<i32>,
}
