//! 固定窗口限流中间件
//!
//! 登录与导入接口按客户端 IP（已认证时按身份）计数，窗口内超过上限返回 429，
//! 并带上 `Retry-After` 表示距窗口结束的秒数。
//!
//! ```rust,ignore
//! web::resource("/login")
//!     .wrap(RateLimit::login())
//!     .route(web::post().to(login))
//! ```

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::{HeaderMap, HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::net::IpAddr;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode, auth::entities::Principal};

// 条目最长存活时间，需不短于最长的限流窗口
const MAX_WINDOW: Duration = Duration::from_secs(10 * 60);

static WINDOWS: Lazy<Cache<String, Window>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(MAX_WINDOW)
        .max_capacity(100_000)
        .build()
});

/// 一个限流窗口内的计数
#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

impl Window {
    fn open(now: Instant) -> Self {
        Self {
            started: now,
            count: 1,
        }
    }

    /// 记录一次请求，窗口过期则重新开始
    fn hit(self, now: Instant, length: Duration) -> Self {
        if now.duration_since(self.started) >= length {
            Self::open(now)
        } else {
            Self {
                count: self.count.saturating_add(1),
                ..self
            }
        }
    }

    fn retry_after(&self, now: Instant, length: Duration) -> u64 {
        let left = length.saturating_sub(now.duration_since(self.started));
        left.as_secs().max(1)
    }
}

#[derive(Clone)]
pub struct RateLimit {
    max_requests: u32,
    window: Duration,
    scope: &'static str,
}

impl RateLimit {
    pub fn new(scope: &'static str, max_requests: u32, window_secs: u64) -> Self {
        let window = Duration::from_secs(window_secs).min(MAX_WINDOW);
        Self {
            max_requests,
            window,
            scope,
        }
    }

    /// 账号登录：每 IP 每分钟 5 次
    pub fn login() -> Self {
        Self::new("login", 5, 60)
    }

    /// 学生登录：每 IP 每分钟 20 次，同一机房学生共用出口 IP
    pub fn student_login() -> Self {
        Self::new("student_login", 20, 60)
    }

    /// 批量导入：每个账号每分钟 10 次
    pub fn import() -> Self {
        Self::new("import", 10, 60)
    }
}

/// 取客户端 IP：连接信息优先，其次 X-Forwarded-For 的第一段，最后 X-Real-IP
///
/// 直接暴露在公网时转发头可以伪造，部署在反向代理之后才可信。
fn client_ip(peer: Option<&str>, headers: &HeaderMap) -> String {
    let valid = |ip: &str| ip.trim().parse::<IpAddr>().is_ok();

    if let Some(ip) = peer.filter(|ip| valid(ip)) {
        return ip.to_string();
    }
    let forwarded = headers
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next());
    let real_ip = headers.get("X-Real-IP").and_then(|v| v.to_str().ok());

    forwarded
        .into_iter()
        .chain(real_ip)
        .map(str::trim)
        .find(|ip| valid(ip))
        .map(str::to_string)
        .unwrap_or_else(|| peer.unwrap_or("unknown").to_string())
}

fn limit_key(scope: &str, req: &ServiceRequest) -> String {
    let who = match req.extensions().get::<Principal>() {
        Some(principal) => format!("{}:{}", principal.role(), principal.id()),
        None => {
            let info = req.connection_info();
            format!("ip:{}", client_ip(info.realip_remote_addr(), req.headers()))
        }
    };
    format!("{scope}:{who}")
}

fn too_many_requests(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header(("Retry-After", retry_after.to_string()))
        .json(ApiResponse::error_empty(
            ErrorCode::RateLimitExceeded,
            format!("Too many requests, retry in {retry_after} seconds"),
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
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
        let limit = self.limit.clone();

        Box::pin(async move {
            let key = limit_key(limit.scope, &req);
            let now = Instant::now();
            let window = WINDOWS
                .entry(key.clone())
                .and_upsert_with(|current| {
                    let next = match current {
                        Some(entry) => entry.into_value().hit(now, limit.window),
                        None => Window::open(now),
                    };
                    ready(next)
                })
                .await
                .into_value();

            if window.count > limit.max_requests {
                warn!(
                    "Rate limit exceeded for {} ({}/{})",
                    key, window.count, limit.max_requests
                );
                let resp = too_many_requests(window.retry_after(now, limit.window));
                return Ok(req.into_response(resp.map_into_right_body()));
            }

            let remaining = limit.max_requests - window.count;
            let mut res = srv.call(req).await?;
            res.headers_mut().insert(
                HeaderName::from_static("x-ratelimit-remaining"),
                HeaderValue::from(remaining),
            );
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let login = RateLimit::login();
        assert_eq!(login.max_requests, 5);
        assert_eq!(login.window, Duration::from_secs(60));
        assert_eq!(RateLimit::student_login().scope, "student_login");
        assert_eq!(RateLimit::import().max_requests, 10);
        // 过长的窗口被截断到缓存存活时间
        assert_eq!(RateLimit::new("x", 1, 3600).window, MAX_WINDOW);
    }

    #[test]
    fn test_window_counts_and_resets() {
        let length = Duration::from_secs(60);
        let start = Instant::now();
        let w = Window::open(start).hit(start, length).hit(start, length);
        assert_eq!(w.count, 3);

        let later = start + Duration::from_secs(61);
        let reset = w.hit(later, length);
        assert_eq!(reset.count, 1);
        assert_eq!(reset.started, later);
    }

    #[test]
    fn test_retry_after() {
        let length = Duration::from_secs(60);
        let start = Instant::now();
        let w = Window::open(start);
        assert_eq!(w.retry_after(start + Duration::from_secs(20), length), 40);
        // 至少 1 秒
        assert_eq!(w.retry_after(start + Duration::from_secs(90), length), 1);
    }

    #[test]
    fn test_client_ip_sources() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_ip(Some("10.0.0.7"), &headers), "10.0.0.7");
        assert_eq!(client_ip(None, &headers), "unknown");

        headers.insert(
            HeaderName::from_static("x-forwarded-for"),
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        assert_eq!(client_ip(Some("garbage"), &headers), "203.0.113.9");

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-real-ip"),
            HeaderValue::from_static("198.51.100.4"),
        );
        assert_eq!(client_ip(None, &headers), "198.51.100.4");
    }
}
