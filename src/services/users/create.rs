use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{UserService, check_ref_id, hash_password_blocking};
use crate::models::{ApiResponse, ErrorCode, users::requests::CreateUserRequest};
use crate::services::{bad_request, conflict, internal_error, require_admin};
use crate::utils::validate::{validate_password, validate_username};

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    user_data.username = user_data.username.trim().to_string();
    if let Err(msg) = validate_username(&user_data.username) {
        return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
    }
    if let Err(msg) = validate_password(&user_data.password) {
        return Ok(bad_request(ErrorCode::UserPasswordInvalid, msg));
    }
    // 学生不使用账号表
    if !user_data.role.is_account_role() {
        return Ok(bad_request(
            ErrorCode::UserRoleInvalid,
            "Accounts can only be admin or teacher",
        ));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = check_ref_id(&storage, user_data.ref_id).await {
        return Ok(resp);
    }

    user_data.password = match hash_password_blocking(user_data.password).await {
        Ok(hash) => hash,
        Err(resp) => return Ok(resp),
    };

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("Account {} ({}) created", user.username, user.role);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(user, "User created successfully")))
        }
        Err(e) if e.is_unique_violation() => Ok(conflict(
            ErrorCode::UserNameAlreadyExists,
            "Username already exists",
        )),
        Err(e) => Ok(internal_error("User creation failed", e)),
    }
}
