use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::pagination::{PageMeta, PaginatedResponse};
use crate::models::ErrorCode;

// 统一的API响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            meta: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
            meta: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

impl<T: TS> ApiResponse<Vec<T>> {
    /// 列表响应：`data` 为当前页，`meta` 为分页信息
    pub fn paginated(page: PaginatedResponse<T>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(page.items),
            meta: Some(page.meta),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            meta: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            meta: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_envelope_shape() {
        let page = PaginatedResponse {
            items: vec![1i32, 2],
            meta: PageMeta::new(12, 1, 2),
        };
        let json = serde_json::to_value(ApiResponse::paginated(page, "ok")).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["data"].as_array().map(|a| a.len()), Some(2));
        assert_eq!(json["meta"]["totalPages"], 6);
    }

    #[test]
    fn test_error_envelope_omits_data_and_meta() {
        let json =
            serde_json::to_value(ApiResponse::error_empty(ErrorCode::NotFound, "missing")).unwrap();
        assert_eq!(json["code"], ErrorCode::NotFound as i32);
        assert!(json.get("data").is_none());
        assert!(json.get("meta").is_none());
    }
}
