use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "room.ts")]
pub struct Room {
    pub room_id: i64,
    pub room_code: String,
    pub capacity: i32,
    pub building: Option<String>,
    pub floor: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
