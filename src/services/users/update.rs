use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{UserService, check_ref_id, hash_password_blocking};
use crate::models::{ApiResponse, ErrorCode, users::requests::UpdateUserRequest};
use crate::services::{bad_request, conflict, internal_error, not_found, require_admin};
use crate::utils::validate::validate_username;

/// 更新账号，密码为空时保留原密码
pub async fn update_user(
    service: &UserService,
    user_id: i64,
    mut update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    if let Some(username) = update_data.username.as_mut() {
        *username = username.trim().to_string();
        if let Err(msg) = validate_username(username) {
            return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
        }
    }
    if let Some(role) = update_data.role
        && !role.is_account_role()
    {
        return Ok(bad_request(
            ErrorCode::UserRoleInvalid,
            "Accounts can only be admin or teacher",
        ));
    }

    let storage = service.get_storage(request);

    if let Some(ref_id) = update_data.ref_id
        && let Err(resp) = check_ref_id(&storage, ref_id).await
    {
        return Ok(resp);
    }

    update_data.password = match update_data.password.take() {
        Some(password) if !password.trim().is_empty() => {
            match hash_password_blocking(password).await {
                Ok(hash) => Some(hash),
                Err(resp) => return Ok(resp),
            }
        }
        _ => None,
    };

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            user,
            "User information updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(e) if e.is_unique_violation() => Ok(conflict(
            ErrorCode::UserNameAlreadyExists,
            "Username already exists",
        )),
        Err(e) => Ok(internal_error("Failed to update user information", e)),
    }
}
