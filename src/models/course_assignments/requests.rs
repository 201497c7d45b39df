use crate::models::common::{PaginationQuery, deserialize_optional_i64};
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_assignment.ts")]
pub struct CourseAssignmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(
        default,
        alias = "teacherId",
        deserialize_with = "deserialize_optional_i64"
    )]
    pub teacher_id: Option<i64>,
    #[serde(
        default,
        alias = "classroomId",
        deserialize_with = "deserialize_optional_i64"
    )]
    pub classroom_id: Option<i64>,
    #[serde(
        default,
        alias = "subjectId",
        deserialize_with = "deserialize_optional_i64"
    )]
    pub subject_id: Option<i64>,
    pub term: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_assignment.ts")]
pub struct CreateCourseAssignmentRequest {
    pub teacher_id: i64,
    pub subject_id: i64,
    pub classroom_id: i64,
    pub term: String,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_assignment.ts")]
pub struct UpdateCourseAssignmentRequest {
    pub teacher_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub classroom_id: Option<i64>,
    pub term: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CourseAssignmentListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub teacher_id: Option<i64>,
    pub classroom_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub term: Option<String>,
    pub search: Option<String>,
}
