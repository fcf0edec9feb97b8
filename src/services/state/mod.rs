pub mod dump;
pub mod export;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct StateService {
    storage: Arc<dyn Storage>,
    export_file_name: String,
}

impl StateService {
    pub fn new(storage: Arc<dyn Storage>, export_file_name: String) -> Self {
        Self {
            storage,
            export_file_name,
        }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 全量状态
    pub async fn dump_state(&self) -> ActixResult<HttpResponse> {
        dump::dump_state(self).await
    }

    // 导出快照
    pub async fn export_state(&self) -> ActixResult<HttpResponse> {
        export::export_state(self).await
    }
}
