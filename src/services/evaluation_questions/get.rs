use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationQuestionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found};

pub async fn get_question(
    service: &EvaluationQuestionService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_question_by_id(id).await {
        Ok(Some(question)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            question,
            "Question retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::QuestionNotFound, "Question not found")),
        Err(e) => Ok(internal_error("Failed to retrieve question", e)),
    }
}
