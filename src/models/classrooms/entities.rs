use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::levels::entities::Level;

// 教室（班级），可归属于某个年级
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct Classroom {
    pub id: i64,
    pub room_name: String,
    pub level_id: Option<i64>,
    pub level: Option<Level>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
