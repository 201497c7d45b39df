use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::StudentLoginRequest, responses::StudentLoginResponse},
    users::entities::UserRole,
};
use crate::services::internal_error;
use crate::utils::jwt::JwtUtils;
use crate::utils::names::full_name_matches;

use super::AuthService;

fn login_failed() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::StudentLoginFailed,
        "Student code or name does not match",
    ))
}

/// 学生登录
///
/// 按学号精确查找，再比较归一化后的全名（忽略称谓与空白）。
pub async fn handle_student_login(
    service: &AuthService,
    login_request: StudentLoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let code = login_request.student_code.trim();
    if code.is_empty() {
        return Ok(login_failed());
    }

    let student = match storage.get_student_by_code(code).await {
        Ok(Some(student)) => student,
        Ok(None) => return Ok(login_failed()),
        Err(e) => return Ok(internal_error("Student login failed", e)),
    };

    if !full_name_matches(
        &student.first_name,
        &student.last_name,
        &login_request.full_name,
    ) {
        return Ok(login_failed());
    }

    match JwtUtils::generate_access_token(student.id, UserRole::Student) {
        Ok(access_token) => {
            info!("Student {} logged in", student.student_code);
            let response = StudentLoginResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60,
                student,
                created_at: chrono::Utc::now(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TokenGenerationFailed,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
