pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest, UserListParams};
use crate::models::ErrorCode;
use crate::services::{internal_error, require_reference};
use crate::storage::Storage;
use crate::utils::password::hash_password;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
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

    pub async fn list_users(
        &self,
        query: UserListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_users(self, query, request).await
    }

    pub async fn get_user(&self, user_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_user(self, user_id, request).await
    }

    pub async fn create_user(
        &self,
        user_data: CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_user(self, user_data, request).await
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        update_data: UpdateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_user(self, user_id, update_data, request).await
    }

    pub async fn delete_user(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_user(self, user_id, request).await
    }
}

/// 在阻塞线程池中计算 Argon2 哈希
pub(crate) async fn hash_password_blocking(password: String) -> Result<String, HttpResponse> {
    match actix_web::web::block(move || hash_password(&password)).await {
        Ok(Ok(hash)) => Ok(hash),
        Ok(Err(e)) => Err(internal_error("Password hashing failed", e)),
        Err(e) => Err(internal_error("Password hashing failed", e)),
    }
}

/// 教师账号关联的教师记录必须存在
pub(crate) async fn check_ref_id(
    storage: &Arc<dyn Storage>,
    ref_id: Option<i64>,
) -> Result<(), HttpResponse> {
    match ref_id {
        Some(teacher_id) => require_reference(
            storage.get_teacher_by_id(teacher_id).await,
            ErrorCode::TeacherNotFound,
            "Teacher",
            teacher_id,
        )
        .map(|_| ()),
        None => Ok(()),
    }
}
