use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationAnswerService;
use crate::models::{ApiResponse, evaluation_answers::requests::EvaluationAnswerListParams};
use crate::services::{internal_error, require_admin};

pub async fn list_answers(
    service: &EvaluationAnswerService,
    query: EvaluationAnswerListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.list_answers(query.eval_id).await {
        Ok(answers) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(answers, "Answers retrieved successfully"))),
        Err(e) => Ok(internal_error("Failed to retrieve answers", e)),
    }
}
