use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationQuestionService;
use crate::models::{
    ApiResponse, ErrorCode, evaluation_questions::requests::CreateEvaluationQuestionRequest,
};
use crate::services::{bad_request, internal_error, require_admin};
use crate::utils::validate::require_text;

pub async fn create_question(
    service: &EvaluationQuestionService,
    mut data: CreateEvaluationQuestionRequest,
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

    match storage.create_question(data).await {
        Ok(question) => Ok(HttpResponse::Created().json(ApiResponse::success(
            question,
            "Question created successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to create question", e)),
    }
}
