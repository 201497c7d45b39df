use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::classrooms::entities::Classroom;

// 学生
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub classroom_id: Option<i64>,
    pub classroom: Option<Classroom>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
