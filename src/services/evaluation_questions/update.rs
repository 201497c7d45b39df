use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationQuestionService;
use crate::models::{
    ApiResponse, ErrorCode, evaluation_questions::requests::UpdateEvaluationQuestionRequest,
};
use crate::services::{bad_request, internal_error, not_found, require_admin};
use crate::utils::validate::require_text;

pub async fn update_question(
    service: &EvaluationQuestionService,
    id: i64,
    mut data: UpdateEvaluationQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    data.question_text = match require_text(&data.question_text, "question_text") {
        Ok(text) => text,
        Err(msg) => return Ok(bad_request(ErrorCode::QuestionTextInvalid, msg)),
    };

    let storage = service.get_storage(request);

    match storage.update_question(id, data).await {
        Ok(Some(question)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            question,
            "Question updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::QuestionNotFound, "Question not found")),
        Err(e) => Ok(internal_error("Failed to update question", e)),
    }
}
