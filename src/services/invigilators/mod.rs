pub mod availability;
pub mod create;
pub mod delete;
pub mod invigilation;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::invigilators::requests::{
    CreateAvailabilityRequest, CreateInvigilationRequest, CreateInvigilatorRequest,
};
use crate::storage::Storage;

pub struct InvigilatorService {
    storage: Arc<dyn Storage>,
}

impl InvigilatorService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 创建监考老师
    pub async fn create_invigilator(
        &self,
        invigilator: CreateInvigilatorRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_invigilator(self, invigilator).await
    }

    // 删除监考老师
    pub async fn delete_invigilator(&self, invigilator_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_invigilator(self, invigilator_id).await
    }

    // 登记空闲时间
    pub async fn add_availability(
        &self,
        invigilator_id: i64,
        slot: CreateAvailabilityRequest,
    ) -> ActixResult<HttpResponse> {
        availability::add_availability(self, invigilator_id, slot).await
    }

    // 列出空闲时间
    pub async fn list_availability(&self, invigilator_id: i64) -> ActixResult<HttpResponse> {
        availability::list_availability(self, invigilator_id).await
    }

    // 删除空闲时间
    pub async fn delete_availability(
        &self,
        invigilator_id: i64,
        avail_id: i64,
    ) -> ActixResult<HttpResponse> {
        availability::delete_availability(self, invigilator_id, avail_id).await
    }

    // 安排监考
    pub async fn assign_invigilator(
        &self,
        exam_id: i64,
        assignment: CreateInvigilationRequest,
    ) -> ActixResult<HttpResponse> {
        invigilation::assign_invigilator(self, exam_id, assignment).await
    }

    // 列出某场考试的监考安排
    pub async fn list_invigilation(&self, exam_id: i64) -> ActixResult<HttpResponse> {
        invigilation::list_invigilation(self, exam_id).await
    }

    // 取消监考安排
    pub async fn delete_invigilation(
        &self,
        exam_id: i64,
        assign_id: i64,
    ) -> ActixResult<HttpResponse> {
        invigilation::delete_invigilation(self, exam_id, assign_id).await
    }
}
