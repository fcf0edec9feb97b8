pub mod create;
pub mod delete;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::exams::requests::CreateExamRequest;
use crate::storage::Storage;

pub struct ExamService {
    storage: Arc<dyn Storage>,
}

impl ExamService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 创建考试
    pub async fn create_exam(&self, exam: CreateExamRequest) -> ActixResult<HttpResponse> {
        create::create_exam(self, exam).await
    }

    // 删除考试
    pub async fn delete_exam(&self, exam_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_exam(self, exam_id).await
    }
}
