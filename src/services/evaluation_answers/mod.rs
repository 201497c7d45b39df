pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluation_answers::requests::{
    CreateEvaluationAnswerRequest, EvaluationAnswerListParams,
};
use crate::storage::Storage;

pub struct EvaluationAnswerService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationAnswerService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_answers(
        &self,
        query: EvaluationAnswerListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_answers(self, query, request).await
    }

    pub async fn create_answer(
        &self,
        data: CreateEvaluationAnswerRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_answer(self, data, request).await
    }

    pub async fn delete_answer(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_answer(self, id, request).await
    }
}
