use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::departments::entities::Department;

// 年级，可归属于某个部门
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/level.ts")]
pub struct Level {
    pub id: i64,
    pub level_name: String,
    pub department_id: Option<i64>,
    pub department: Option<Department>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
