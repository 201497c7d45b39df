pub mod create;
pub mod delete;
pub mod get;
pub mod import;
pub mod list;
pub mod students;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use actix_multipart::Multipart;
use crate::models::PaginationQuery;
use crate::models::classrooms::requests::{
    ClassroomListParams, CreateClassroomRequest, UpdateClassroomRequest,
};
use crate::storage::Storage;

pub struct ClassroomService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassroomService {
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

    pub async fn list_classrooms(
        &self,
        query: ClassroomListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_classrooms(self, query, request).await
    }

    pub async fn get_classroom(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_classroom(self, id, request).await
    }

    // 按名称精确查找
    pub async fn find_classroom_by_name(
        &self,
        name: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::find_classroom_by_name(self, name, request).await
    }

    // 教室内的学生
    pub async fn list_classroom_students(
        &self,
        id: i64,
        query: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::list_classroom_students(self, id, query, request).await
    }

    pub async fn create_classroom(
        &self,
        data: CreateClassroomRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_classroom(self, data, request).await
    }

    pub async fn update_classroom(
        &self,
        id: i64,
        data: UpdateClassroomRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_classroom(self, id, data, request).await
    }

    pub async fn delete_classroom(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_classroom(self, id, request).await
    }

    // 导入学生名单（自动创建教室）
    pub async fn import_students(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_students(self, payload, request).await
    }
}
