pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluation_questions::requests::{
    CreateEvaluationQuestionRequest, EvaluationQuestionListParams,
    UpdateEvaluationQuestionRequest,
};
use crate::storage::Storage;

pub struct EvaluationQuestionService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationQuestionService {
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

    pub async fn list_questions(
        &self,
        query: EvaluationQuestionListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_questions(self, query, request).await
    }

    pub async fn get_question(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_question(self, id, request).await
    }

    pub async fn create_question(
        &self,
        data: CreateEvaluationQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_question(self, data, request).await
    }

    pub async fn update_question(
        &self,
        id: i64,
        data: UpdateEvaluationQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_question(self, id, data, request).await
    }

    pub async fn delete_question(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_question(self, id, request).await
    }
}
