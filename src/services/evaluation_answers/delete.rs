use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationAnswerService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found, require_admin};

pub async fn delete_answer(
    service: &EvaluationAnswerService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.delete_answer(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Answer deleted successfully",
        ))),
        Ok(false) => Ok(not_found(ErrorCode::AnswerNotFound, "Answer not found")),
        Err(e) => Ok(internal_error("Failed to delete answer", e)),
    }
}
