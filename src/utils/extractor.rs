//! 路径参数提取器
//!
//! 路径中的 ID 必须是正整数，否则直接返回 400 统一错误响应。

use actix_web::{HttpResponse, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};

/// 解析正整数 ID
pub fn parse_positive_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

pub(crate) fn invalid_path_param(param: &str, raw: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid path parameter {param}: '{raw}'"),
    ));
    InternalError::from_response(format!("invalid {param}"), response).into()
}

/// 定义按名称读取路径参数的 i64 提取器
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let raw = req.match_info().get($param).unwrap_or_default();
                std::future::ready(
                    $crate::utils::extractor::parse_positive_id(raw)
                        .map($name)
                        .ok_or_else(|| $crate::utils::extractor::invalid_path_param($param, raw)),
                )
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{FromRequest, test::TestRequest};

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id("12"), Some(12));
        assert_eq!(parse_positive_id(" 7 "), Some(7));
        assert_eq!(parse_positive_id("0"), None);
        assert_eq!(parse_positive_id("-3"), None);
        assert_eq!(parse_positive_id("abc"), None);
    }

    #[actix_web::test]
    async fn test_extractor_reads_named_param() {
        let req = TestRequest::default().param("id", "15").to_http_request();
        let id = SafeIDI64::extract(&req).await.unwrap();
        assert_eq!(id.0, 15);

        let req = TestRequest::default().param("id", "x").to_http_request();
        assert!(SafeIDI64::extract(&req).await.is_err());
    }
}
