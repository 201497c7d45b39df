pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod scan;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subjects::requests::{
    CreateSubjectRequest, SaveScannedSubjectsRequest, ScanSubjectsRequest, SubjectListParams,
    UpdateSubjectRequest,
};
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
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

    pub async fn list_subjects(
        &self,
        query: SubjectListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_subjects(self, query, request).await
    }

    pub async fn get_subject(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_subject(self, id, request).await
    }

    pub async fn create_subject(
        &self,
        data: CreateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_subject(self, data, request).await
    }

    pub async fn update_subject(
        &self,
        id: i64,
        data: UpdateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_subject(self, id, data, request).await
    }

    pub async fn delete_subject(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_subject(self, id, request).await
    }

    // 从课表文本识别科目
    pub async fn scan_subjects(
        &self,
        data: ScanSubjectsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        scan::scan_subjects(data, request).await
    }

    pub async fn save_scanned_subjects(
        &self,
        data: SaveScannedSubjectsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        scan::save_scanned_subjects(self, data, request).await
    }
}
