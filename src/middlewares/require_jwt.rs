/*!
 * JWT 认证中间件
 *
 * 校验 `Authorization: Bearer <token>`，解析出当前身份（管理端账号或学生），
 * 放入请求扩展供后续中间件与处理程序使用。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RequireJWT;
 *
 * web::scope("/api/v1/students")
 *     .wrap(RequireJWT)
 *     .route("", web::get().to(list_students));
 * ```
 *
 * 处理程序中：
 *
 * ```rust,ignore
 * let role = RequireJWT::extract_user_role(&req);
 * let student = RequireJWT::extract_student(&req);
 * ```
 *
 * ## 认证流程
 *
 * 1. 校验令牌签名与有效期
 * 2. 按令牌查缓存，命中则直接使用
 * 3. 未命中时按令牌中的角色从存储加载学生或账号，停用账号拒绝
 * 4. 写回缓存，TTL 取配置的默认值
 */

use crate::cache::{ObjectCache, get_json, insert_json, principal_cache_key};
use crate::config::AppConfig;
use crate::models::ErrorCode;
use crate::models::auth::entities::Principal;
use crate::models::students::entities::Student;
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

/// 从请求头取出 Bearer 令牌
pub fn bearer_token(req: &actix_web::HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

// 提取并验证 JWT，返回当前身份
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<Principal, String> {
    let token = bearer_token(req.request())
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?
        .to_string();

    let claims = JwtUtils::verify_token(&token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| "Cache not configured".to_string())?;

    let cache_key = principal_cache_key(&token);
    if let Some(principal) = get_json::<Principal>(cache.as_ref(), &cache_key).await {
        return Ok(principal);
    }
    debug!("Principal not cached for subject {}", claims.sub);

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| "Storage not configured".to_string())?;

    let subject_id = claims
        .subject_id()
        .ok_or_else(|| "Invalid subject in JWT".to_string())?;
    let role = claims
        .role()
        .ok_or_else(|| "Invalid role in JWT".to_string())?;

    let principal = if role == UserRole::Student {
        let student = storage
            .get_student_by_id(subject_id)
            .await
            .map_err(|_| "Failed to retrieve student from storage".to_string())?
            .ok_or_else(|| "Student not found".to_string())?;
        Principal::Student(student)
    } else {
        let user = storage
            .get_user_by_id(subject_id)
            .await
            .map_err(|_| "Failed to retrieve user from storage".to_string())?
            .ok_or_else(|| "User not found".to_string())?;
        if !user.is_active {
            return Err("User is not active".to_string());
        }
        if user.role != role {
            return Err("Role in token no longer matches the account".to_string());
        }
        Principal::User(user)
    };

    insert_json(
        cache.as_ref(),
        cache_key,
        &principal,
        AppConfig::get().cache.default_ttl,
    )
    .await;

    Ok(principal)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 预检请求直接放行为 204
            if req.method() == actix_web::http::Method::OPTIONS {
                let resp = HttpResponse::NoContent().finish();
                return Ok(req.into_response(resp.map_into_right_body()));
            }

            match extract_and_validate_jwt(&req).await {
                Ok(principal) => {
                    debug!(
                        "JWT authentication successful for {} {}",
                        principal.role(),
                        principal.id()
                    );
                    req.extensions_mut().insert(principal);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取身份信息
impl RequireJWT {
    /// 当前身份
    pub fn extract_principal(req: &actix_web::HttpRequest) -> Option<Principal> {
        req.extensions().get::<Principal>().cloned()
    }

    /// 当前管理端账号，学生身份时为 None
    pub fn extract_user_claims(req: &actix_web::HttpRequest) -> Option<User> {
        match req.extensions().get::<Principal>() {
            Some(Principal::User(user)) => Some(user.clone()),
            _ => None,
        }
    }

    /// 当前账号 ID，学生身份时为 None
    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        match req.extensions().get::<Principal>() {
            Some(Principal::User(user)) => Some(user.id),
            _ => None,
        }
    }

    /// 当前角色，学生身份为 Student
    pub fn extract_user_role(req: &actix_web::HttpRequest) -> Option<UserRole> {
        req.extensions().get::<Principal>().map(Principal::role)
    }

    /// 当前学生
    pub fn extract_student(req: &actix_web::HttpRequest) -> Option<Student> {
        match req.extensions().get::<Principal>() {
            Some(Principal::Student(student)) => Some(student.clone()),
            _ => None,
        }
    }
}
