use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::entities::Principal;
use crate::models::auth::responses::{MeResponse, TokenVerificationResponse};
use crate::models::{ApiResponse, ErrorCode};

use super::AuthService;

pub async fn handle_verify_token(
    _service: &AuthService,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TokenVerificationResponse { is_valid: true },
        "Token is valid",
    )))
}

/// 当前身份；学生身份重新读取以带上最新的教室信息
pub async fn handle_me(service: &AuthService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let me = match RequireJWT::extract_principal(request) {
        Some(Principal::User(user)) => MeResponse::User { user },
        Some(Principal::Student(student)) => {
            let storage = service.get_storage(request);
            match storage.get_student_by_id(student.id).await {
                Ok(Some(fresh)) => MeResponse::Student { student: fresh },
                _ => MeResponse::Student { student },
            }
        }
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        me,
        "Current identity retrieved successfully",
    )))
}
