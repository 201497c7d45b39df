use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationAnswerService;
use crate::models::{
    ApiResponse, ErrorCode,
    evaluation_answers::{
        entities::{MAX_SCORE, MIN_SCORE, is_valid_score},
        requests::CreateEvaluationAnswerRequest,
    },
};
use crate::services::{bad_request, conflict, internal_error, require_admin, require_reference};

pub async fn create_answer(
    service: &EvaluationAnswerService,
    data: CreateEvaluationAnswerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    if !is_valid_score(data.score) {
        return Ok(bad_request(
            ErrorCode::ScoreOutOfRange,
            format!("Score must be between {MIN_SCORE} and {MAX_SCORE}"),
        ));
    }

    let storage = service.get_storage(request);

    let references = require_reference(
        storage.get_evaluation_by_id(data.eval_id).await,
        ErrorCode::EvaluationNotFound,
        "Evaluation",
        data.eval_id,
    )
    .and(require_reference(
        storage.get_question_by_id(data.question_id).await,
        ErrorCode::QuestionNotFound,
        "Question",
        data.question_id,
    ));
    if let Err(resp) = references {
        return Ok(resp);
    }

    match storage.create_answer(data).await {
        Ok(answer) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(answer, "Answer created successfully"))),
        Err(e) if e.is_unique_violation() => Ok(conflict(
            ErrorCode::AnswerAlreadyExists,
            "This question is already answered in the evaluation",
        )),
        Err(e) => Ok(internal_error("Failed to create answer", e)),
    }
}
