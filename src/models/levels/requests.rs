use crate::models::common::{PaginationQuery, deserialize_optional_i64};
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/level.ts")]
pub struct LevelListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(
        default,
        alias = "departmentId",
        deserialize_with = "deserialize_optional_i64"
    )]
    pub department_id: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/level.ts")]
pub struct CreateLevelRequest {
    pub level_name: String,
    pub department_id: Option<i64>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/level.ts")]
pub struct UpdateLevelRequest {
    pub level_name: Option<String>,
    #[serde(default, with = "crate::models::users::requests::double_option")]
    #[ts(type = "number | null")]
    pub department_id: Option<Option<i64>>,
}

#[derive(Debug, Clone, Default)]
pub struct LevelListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub department_id: Option<i64>,
    pub search: Option<String>,
}
