pub mod create;
pub mod delete;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::CreateStudentRequest;
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 创建学生
    pub async fn create_student(&self, student: CreateStudentRequest) -> ActixResult<HttpResponse> {
        create::create_student(self, student).await
    }

    // 删除学生
    pub async fn delete_student(&self, student_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_student(self, student_id).await
    }
}
