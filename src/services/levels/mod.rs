pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::levels::requests::{CreateLevelRequest, LevelListParams, UpdateLevelRequest};
use crate::storage::Storage;

pub struct LevelService {
    storage: Option<Arc<dyn Storage>>,
}

impl LevelService {
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

    pub async fn list_levels(
        &self,
        query: LevelListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_levels(self, query, request).await
    }

    pub async fn get_level(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_level(self, id, request).await
    }

    // 按名称精确查找
    pub async fn find_level_by_name(
        &self,
        name: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::find_level_by_name(self, name, request).await
    }

    pub async fn create_level(
        &self,
        data: CreateLevelRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_level(self, data, request).await
    }

    pub async fn update_level(
        &self,
        id: i64,
        data: UpdateLevelRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_level(self, id, data, request).await
    }

    pub async fn delete_level(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_level(self, id, request).await
    }
}
