use crate::models::common::{PaginationQuery, deserialize_optional_i64};
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(
        default,
        alias = "classroomId",
        deserialize_with = "deserialize_optional_i64"
    )]
    pub classroom_id: Option<i64>,
    #[serde(
        default,
        alias = "studentId",
        deserialize_with = "deserialize_optional_i64"
    )]
    pub student_id: Option<i64>,
    #[serde(
        default,
        alias = "assignmentId",
        deserialize_with = "deserialize_optional_i64"
    )]
    pub assignment_id: Option<i64>,
    #[serde(
        default,
        alias = "teacherId",
        deserialize_with = "deserialize_optional_i64"
    )]
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

// 管理员直接创建评价记录
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct CreateEvaluationRequest {
    pub student_id: i64,
    pub assignment_id: i64,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SubmitAnswer {
    pub question_id: i64,
    pub score: i32,
}

// 学生提交评价
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SubmitEvaluationRequest {
    pub assignment_id: i64,
    pub suggestion: Option<String>,
    pub answers: Vec<SubmitAnswer>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SummaryParams {
    #[serde(
        default,
        alias = "classroomId",
        deserialize_with = "deserialize_optional_i64"
    )]
    pub classroom_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, TS, Default)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct ExportParams {
    #[serde(default)]
    pub format: ExportFormat,
    #[serde(
        default,
        alias = "classroomId",
        deserialize_with = "deserialize_optional_i64"
    )]
    pub classroom_id: Option<i64>,
    pub search: Option<String>,
}

// 存储层查询
#[derive(Debug, Clone, Default)]
pub struct EvaluationListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub classroom_id: Option<i64>,
    pub student_id: Option<i64>,
    pub assignment_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_default_and_parse() {
        let p: ExportParams = serde_json::from_str("{}").unwrap();
        assert_eq!(p.format, ExportFormat::Csv);
        let p: ExportParams =
            serde_json::from_str(r#"{"format":"xlsx","classroomId":"3"}"#).unwrap();
        assert_eq!(p.format, ExportFormat::Xlsx);
        assert_eq!(p.classroom_id, Some(3));
    }

    #[test]
    fn test_list_params_empty_filter_is_none() {
        let p: EvaluationListParams =
            serde_json::from_str(r#"{"page":"1","limit":"20","classroom_id":""}"#).unwrap();
        assert_eq!(p.classroom_id, None);
        assert_eq!(p.pagination.limit, 20);
    }
}
