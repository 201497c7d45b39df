pub mod create;
pub mod delete;
pub mod get;
pub mod import;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use actix_multipart::Multipart;
use crate::models::course_assignments::requests::{
    CourseAssignmentListParams, CreateCourseAssignmentRequest, UpdateCourseAssignmentRequest,
};
use crate::storage::Storage;

pub struct CourseAssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseAssignmentService {
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

    pub async fn list_course_assignments(
        &self,
        query: CourseAssignmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_course_assignments(self, query, request).await
    }

    pub async fn get_course_assignment(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_course_assignment(self, id, request).await
    }

    pub async fn create_course_assignment(
        &self,
        data: CreateCourseAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course_assignment(self, data, request).await
    }

    pub async fn update_course_assignment(
        &self,
        id: i64,
        data: UpdateCourseAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course_assignment(self, id, data, request).await
    }

    pub async fn delete_course_assignment(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course_assignment(self, id, request).await
    }

    // 导入授课安排，需附带 term 字段
    pub async fn import_course_assignments(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_course_assignments(self, payload, request).await
    }
}
