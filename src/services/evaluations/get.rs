use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found, teacher_scope};

pub async fn get_evaluation(
    service: &EvaluationService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let scope = match teacher_scope(request) {
        Ok(scope) => scope,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    match storage.get_evaluation_detail(id).await {
        // 不属于该教师的评价按不存在处理
        Ok(Some(detail)) if scope.is_some() && detail.teacher_id() != scope => Ok(not_found(
            ErrorCode::EvaluationNotFound,
            "Evaluation not found",
        )),
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            detail,
            "Evaluation retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::EvaluationNotFound, "Evaluation not found")),
        Err(e) => Ok(internal_error("Failed to retrieve evaluation", e)),
    }
}
