use super::entities::UserRole;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 账号列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}

// 创建账号
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub role: UserRole,
    pub ref_id: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

// 更新账号，空密码表示保留原密码
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    /// `Some(None)` 表示解除关联
    #[serde(default, with = "double_option")]
    #[ts(type = "number | null")]
    pub ref_id: Option<Option<i64>>,
    pub is_active: Option<bool>,
}

// 账号列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}

fn default_active() -> bool {
    true
}

/// 区分字段缺失与显式 null
pub(crate) mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_ref_id_null_vs_missing() {
        let missing: UpdateUserRequest = serde_json::from_str(r#"{"is_active":false}"#).unwrap();
        assert_eq!(missing.ref_id, None);
        let cleared: UpdateUserRequest = serde_json::from_str(r#"{"ref_id":null}"#).unwrap();
        assert_eq!(cleared.ref_id, Some(None));
        let set: UpdateUserRequest = serde_json::from_str(r#"{"ref_id":7}"#).unwrap();
        assert_eq!(set.ref_id, Some(Some(7)));
    }

    #[test]
    fn test_create_defaults_active() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"username":"t.smith","password":"pw","role":"teacher"}"#)
                .unwrap();
        assert!(req.is_active);
        assert_eq!(req.role, UserRole::Teacher);
    }
}
