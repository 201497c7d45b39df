use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use crate::models::{ApiResponse, ErrorCode, evaluations::requests::CreateEvaluationRequest};
use crate::services::{conflict, internal_error, require_admin, require_reference};

/// 管理员直接创建评价记录，日期为当前时间，答案另行添加
pub async fn create_evaluation(
    service: &EvaluationService,
    mut data: CreateEvaluationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    data.suggestion = data
        .suggestion
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let storage = service.get_storage(request);

    let references = require_reference(
        storage.get_student_by_id(data.student_id).await,
        ErrorCode::StudentNotFound,
        "Student",
        data.student_id,
    )
    .and(require_reference(
        storage.get_course_assignment_by_id(data.assignment_id).await,
        ErrorCode::AssignmentNotFound,
        "Course assignment",
        data.assignment_id,
    ));
    if let Err(resp) = references {
        return Ok(resp);
    }

    match storage.create_evaluation(data).await {
        Ok(evaluation) => Ok(HttpResponse::Created().json(ApiResponse::success(
            evaluation,
            "Evaluation created successfully",
        ))),
        Err(e) if e.is_unique_violation() => Ok(conflict(
            ErrorCode::EvaluationAlreadySubmitted,
            "The student has already evaluated this course assignment",
        )),
        Err(e) => Ok(internal_error("Failed to create evaluation", e)),
    }
}
