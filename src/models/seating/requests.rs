use serde::Deserialize;
use ts_rs::TS;

// 座位查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "seating.ts")]
pub struct SeatListQuery {
    pub room_id: Option<i64>,
}
