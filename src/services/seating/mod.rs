pub mod assign;
pub mod clear;
pub mod list;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::seating::requests::SeatListQuery;
use crate::storage::Storage;

pub struct SeatingService {
    storage: Arc<dyn Storage>,
}

impl SeatingService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 为考试分配座位
    pub async fn assign_seats(&self, exam_id: i64) -> ActixResult<HttpResponse> {
        assign::assign_seats(self, exam_id).await
    }

    // 查询座位
    pub async fn list_seats(
        &self,
        exam_id: i64,
        query: SeatListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_seats(self, exam_id, query).await
    }

    // 清空全部座位
    pub async fn clear_seats(&self) -> ActixResult<HttpResponse> {
        clear::clear_seats(self).await
    }
}
