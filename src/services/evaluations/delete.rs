use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found, require_admin};

pub async fn delete_evaluation(
    service: &EvaluationService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.delete_evaluation(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Evaluation deleted successfully",
        ))),
        Ok(false) => Ok(not_found(ErrorCode::EvaluationNotFound, "Evaluation not found")),
        Err(e) => Ok(internal_error("Failed to delete evaluation", e)),
    }
}
