pub mod auth;
pub mod classrooms;
pub mod course_assignments;
pub mod dashboard;
pub mod departments;
pub mod evaluation_answers;
pub mod evaluation_questions;
pub mod evaluations;
pub mod import;
pub mod levels;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use auth::AuthService;
pub use classrooms::ClassroomService;
pub use course_assignments::CourseAssignmentService;
pub use dashboard::DashboardService;
pub use departments::DepartmentService;
pub use evaluation_answers::EvaluationAnswerService;
pub use evaluation_questions::EvaluationQuestionService;
pub use evaluations::EvaluationService;
pub use levels::LevelService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;
pub use users::UserService;

use actix_web::{HttpRequest, HttpResponse};
use std::fmt::Display;
use tracing::error;

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, users::entities::UserRole};

/// 存储层失败统一返回 500
pub(crate) fn internal_error(context: &str, e: impl Display) -> HttpResponse {
    error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("{context}: {e}"),
    ))
}

pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn not_found(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn conflict(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn forbidden(message: impl Into<String>) -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(ErrorCode::Forbidden, message))
}

/// 被引用的记录必须存在，否则返回 400
pub(crate) fn require_reference<T>(
    found: crate::errors::Result<Option<T>>,
    code: ErrorCode,
    what: &str,
    id: i64,
) -> Result<T, HttpResponse> {
    match found {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(bad_request(code, format!("{what} {id} does not exist"))),
        Err(e) => Err(internal_error(&format!("Failed to check {what}"), e)),
    }
}

/// 写操作仅限管理员
pub(crate) fn require_admin(request: &HttpRequest) -> Result<(), HttpResponse> {
    match RequireJWT::extract_user_role(request) {
        Some(UserRole::Admin) => Ok(()),
        _ => Err(forbidden("Administrator privileges required")),
    }
}

/// 教师账号只能查看自己的数据
///
/// 管理员返回 `None`（不限制），教师账号返回其绑定的教师 ID。
pub(crate) fn teacher_scope(request: &HttpRequest) -> Result<Option<i64>, HttpResponse> {
    let principal = RequireJWT::extract_principal(request)
        .ok_or_else(|| forbidden("Authentication required"))?;

    match principal.role() {
        UserRole::Admin => Ok(None),
        UserRole::Teacher => principal
            .teacher_ref()
            .map(Some)
            .ok_or_else(|| forbidden("This teacher account is not linked to a teacher record")),
        UserRole::Student => Err(forbidden("Access denied")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::entities::Principal;
    use crate::models::users::entities::User;
    use actix_web::{HttpMessage, http::StatusCode, test::TestRequest};

    fn request_as(role: UserRole, ref_id: Option<i64>) -> HttpRequest {
        let now = chrono::Utc::now();
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(Principal::User(User {
            id: 1,
            username: "staff".into(),
            password_hash: String::new(),
            role,
            ref_id,
            is_active: true,
            last_login: None,
            created_at: now,
            updated_at: now,
        }));
        req
    }

    #[test]
    fn test_require_admin() {
        assert!(require_admin(&request_as(UserRole::Admin, None)).is_ok());
        let denied = require_admin(&request_as(UserRole::Teacher, Some(2))).unwrap_err();
        assert_eq!(denied.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_teacher_scope() {
        assert_eq!(teacher_scope(&request_as(UserRole::Admin, None)).ok(), Some(None));
        assert_eq!(
            teacher_scope(&request_as(UserRole::Teacher, Some(7))).ok(),
            Some(Some(7))
        );
        assert!(teacher_scope(&request_as(UserRole::Teacher, None)).is_err());
        assert!(teacher_scope(&TestRequest::default().to_http_request()).is_err());
    }
}
