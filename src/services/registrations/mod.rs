pub mod register;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::registrations::requests::RegisterStudentsRequest;
use crate::storage::Storage;

pub struct RegistrationService {
    storage: Arc<dyn Storage>,
}

impl RegistrationService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 批量报名
    pub async fn register_students(
        &self,
        request: RegisterStudentsRequest,
    ) -> ActixResult<HttpResponse> {
        register::register_students(self, request).await
    }
}
