pub mod aggregate;
pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod list;
pub mod pending;
pub mod submit;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluations::requests::{
    CreateEvaluationRequest, EvaluationListParams, ExportParams, SubmitEvaluationRequest,
    SummaryParams,
};
use crate::storage::Storage;

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationService {
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

    pub async fn list_evaluations(
        &self,
        query: EvaluationListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_evaluations(self, query, request).await
    }

    pub async fn get_evaluation(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_evaluation(self, id, request).await
    }

    pub async fn create_evaluation(
        &self,
        data: CreateEvaluationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_evaluation(self, data, request).await
    }

    pub async fn delete_evaluation(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_evaluation(self, id, request).await
    }

    // 学生提交评价
    pub async fn submit_evaluation(
        &self,
        data: SubmitEvaluationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_evaluation(self, data, request).await
    }

    // 学生待评价课程
    pub async fn list_pending(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        pending::list_pending(self, request).await
    }

    pub async fn summarize_assignments(
        &self,
        query: SummaryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::summarize_assignments(self, query, request).await
    }

    pub async fn summarize_teachers(
        &self,
        query: SummaryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::summarize_teachers(self, query, request).await
    }

    pub async fn teacher_detail(
        &self,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::teacher_detail(self, teacher_id, request).await
    }

    pub async fn export_evaluations(
        &self,
        query: ExportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        export::export_evaluations(self, query, request).await
    }
}
