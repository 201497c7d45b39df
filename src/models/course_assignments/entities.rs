use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::classrooms::entities::Classroom;
use crate::models::subjects::entities::Subject;
use crate::models::teachers::entities::Teacher;

// 授课安排：教师 + 科目 + 教室 + 学期
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_assignment.ts")]
pub struct CourseAssignment {
    pub id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub classroom_id: i64,
    pub term: String,
    pub teacher: Option<Teacher>,
    pub subject: Option<Subject>,
    pub classroom: Option<Classroom>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
