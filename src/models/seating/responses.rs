use super::entities::SeatedStudent;
use serde::Serialize;
use ts_rs::TS;

// 单个座位
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "seating.ts")]
pub struct SeatView {
    pub seat_number: i32,
    pub student: SeatedStudent,
}

// 单个考场的座位表
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "seating.ts")]
pub struct RoomSeating {
    pub room_id: i64,
    pub room_code: String,
    pub capacity: i32,
    pub seats: Vec<SeatView>,
}

// 座位分配结果
//
// 容量不足时 unseated > 0 并带有 warning，不视为错误。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "seating.ts")]
pub struct SeatingResult {
    pub exam_id: i64,
    pub total: usize,
    pub seated: usize,
    pub unseated: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub rooms: Vec<RoomSeating>,
}

// 清空座位结果
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "seating.ts")]
pub struct ClearSeatsResponse {
    pub removed: u64,
}
