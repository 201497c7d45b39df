use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationQuestionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found, require_admin};

// 已有答案随题目级联删除
pub async fn delete_question(
    service: &EvaluationQuestionService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.delete_question(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Question deleted successfully",
        ))),
        Ok(false) => Ok(not_found(ErrorCode::QuestionNotFound, "Question not found")),
        Err(e) => Ok(internal_error("Failed to delete question", e)),
    }
}
