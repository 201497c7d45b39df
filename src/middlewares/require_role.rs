//! 角色校验中间件
//!
//! 依赖 RequireJWT 写入的 [`Principal`]，必须注册在 RequireJWT 之内：
//! 同一 scope 上后注册的中间件先执行，所以写法是先 `wrap(RequireRole)` 再 `wrap(RequireJWT)`，
//! 或者像大多数路由那样放进内层 `scope("")`。
//!
//! ```rust,ignore
//! web::scope("/api/v1/users")
//!     .wrap(RequireRole::new_any(UserRole::admin_roles()))
//!     .wrap(RequireJWT)
//! ```

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use super::create_error_response;
use crate::models::{ErrorCode, auth::entities::Principal, users::entities::UserRole};

#[derive(Clone)]
pub struct RequireRole {
    allowed: Vec<UserRole>,
}

impl RequireRole {
    pub fn new(role: UserRole) -> Self {
        Self {
            allowed: vec![role],
        }
    }

    /// 命中任一角色即放行
    pub fn new_any(roles: &[&UserRole]) -> Self {
        Self {
            allowed: roles.iter().map(|r| **r).collect(),
        }
    }

    fn permits(&self, role: UserRole) -> bool {
        self.allowed.contains(&role)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            rule: self.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    rule: RequireRole,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let identity = req
            .extensions()
            .get::<Principal>()
            .map(|p| (p.id(), p.role()));

        let denied = match identity {
            Some((_, role)) if self.rule.permits(role) => None,
            Some((id, role)) => {
                info!(
                    "{} {} denied on {}, allowed roles: {:?}",
                    role,
                    id,
                    req.path(),
                    self.rule.allowed
                );
                Some((StatusCode::FORBIDDEN, ErrorCode::Forbidden, "Access denied"))
            }
            None => {
                // 路由上漏挂 RequireJWT
                info!("No principal on {}, is RequireJWT applied?", req.path());
                Some((
                    StatusCode::UNAUTHORIZED,
                    ErrorCode::Unauthorized,
                    "Authentication required",
                ))
            }
        };

        Box::pin(async move {
            match denied {
                None => Ok(srv.call(req).await?.map_into_left_body()),
                Some((status, code, message)) => Ok(req.into_response(
                    create_error_response(status, code, message).map_into_right_body(),
                )),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_sets() {
        let staff = RequireRole::new_any(UserRole::staff_roles());
        assert!(staff.permits(UserRole::Admin));
        assert!(staff.permits(UserRole::Teacher));
        assert!(!staff.permits(UserRole::Student));

        let student = RequireRole::new(UserRole::Student);
        assert!(student.permits(UserRole::Student));
        assert!(!student.permits(UserRole::Admin));
    }
}
