use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EvaluationService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    evaluation_answers::entities::{MAX_SCORE, MIN_SCORE, is_valid_score},
    evaluations::requests::{SubmitAnswer, SubmitEvaluationRequest},
};
use crate::services::{bad_request, conflict, forbidden, internal_error, not_found};

/// 校验答案：评价表中每道题恰好回答一次，分数在 1..=5
fn validate_answers(
    answers: &[SubmitAnswer],
    question_ids: &[i64],
) -> Result<(), (ErrorCode, String)> {
    if let Some(bad) = answers.iter().find(|a| !is_valid_score(a.score)) {
        return Err((
            ErrorCode::ScoreOutOfRange,
            format!(
                "Score for question {} must be between {MIN_SCORE} and {MAX_SCORE}",
                bad.question_id
            ),
        ));
    }

    let expected: HashSet<i64> = question_ids.iter().copied().collect();
    let mut answered = HashSet::new();
    for answer in answers {
        if !expected.contains(&answer.question_id) {
            return Err((
                ErrorCode::EvaluationAnswersIncomplete,
                format!("Question {} is not part of the rubric", answer.question_id),
            ));
        }
        if !answered.insert(answer.question_id) {
            return Err((
                ErrorCode::EvaluationAnswersIncomplete,
                format!("Question {} is answered more than once", answer.question_id),
            ));
        }
    }
    if answered.len() != expected.len() {
        return Err((
            ErrorCode::EvaluationAnswersIncomplete,
            "Every question must be answered".to_string(),
        ));
    }
    Ok(())
}

/// 学生提交评价，评价与答案在同一事务中写入
pub async fn submit_evaluation(
    service: &EvaluationService,
    data: SubmitEvaluationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(student) = RequireJWT::extract_student(request) else {
        return Ok(forbidden("Only students can submit evaluations"));
    };

    let storage = service.get_storage(request);

    let assignment = match storage.get_course_assignment_by_id(data.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(not_found(
                ErrorCode::AssignmentNotFound,
                "Course assignment not found",
            ));
        }
        Err(e) => return Ok(internal_error("Failed to retrieve course assignment", e)),
    };
    if student.classroom_id != Some(assignment.classroom_id) {
        return Ok(bad_request(
            ErrorCode::AssignmentNotInClassroom,
            "This course assignment does not belong to your classroom",
        ));
    }

    let questions = match storage.list_all_questions().await {
        Ok(questions) => questions,
        Err(e) => return Ok(internal_error("Failed to retrieve questions", e)),
    };
    let question_ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
    if let Err((code, msg)) = validate_answers(&data.answers, &question_ids) {
        return Ok(bad_request(code, msg));
    }

    match storage.list_evaluated_assignment_ids(student.id).await {
        Ok(ids) if ids.contains(&data.assignment_id) => {
            return Ok(conflict(
                ErrorCode::EvaluationAlreadySubmitted,
                "You have already evaluated this course assignment",
            ));
        }
        Ok(_) => {}
        Err(e) => return Ok(internal_error("Failed to check existing evaluations", e)),
    }

    match storage.submit_evaluation(student.id, data).await {
        Ok(evaluation) => {
            info!(
                "Student {} submitted evaluation {} for assignment {}",
                student.id, evaluation.id, evaluation.assignment_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                evaluation,
                "Evaluation submitted successfully",
            )))
        }
        // 并发重复提交由唯一索引拦截
        Err(e) if e.is_unique_violation() => Ok(conflict(
            ErrorCode::EvaluationAlreadySubmitted,
            "You have already evaluated this course assignment",
        )),
        Err(e) => Ok(internal_error("Failed to submit evaluation", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::entities::Principal;
    use crate::storage::sea_orm_storage::testing::{Fixture, memory_storage, seed};
    use actix_web::{HttpMessage, http::StatusCode, test::TestRequest};
    use std::sync::Arc;

    fn answers(pairs: &[(i64, i32)]) -> Vec<SubmitAnswer> {
        pairs
            .iter()
            .map(|&(question_id, score)| SubmitAnswer { question_id, score })
            .collect()
    }

    #[test]
    fn test_complete_answers_pass() {
        assert!(validate_answers(&answers(&[(1, 5), (2, 1), (3, 3)]), &[1, 2, 3]).is_ok());
    }

    #[test]
    fn test_score_out_of_range() {
        let err = validate_answers(&answers(&[(1, 6), (2, 1)]), &[1, 2]).unwrap_err();
        assert_eq!(err.0, ErrorCode::ScoreOutOfRange);
        let err = validate_answers(&answers(&[(1, 0), (2, 1)]), &[1, 2]).unwrap_err();
        assert_eq!(err.0, ErrorCode::ScoreOutOfRange);
    }

    #[test]
    fn test_missing_duplicate_and_unknown_questions() {
        let missing = validate_answers(&answers(&[(1, 5)]), &[1, 2]).unwrap_err();
        assert_eq!(missing.0, ErrorCode::EvaluationAnswersIncomplete);

        let duplicate = validate_answers(&answers(&[(1, 5), (1, 4)]), &[1, 2]).unwrap_err();
        assert_eq!(duplicate.0, ErrorCode::EvaluationAnswersIncomplete);

        let unknown = validate_answers(&answers(&[(1, 5), (9, 4)]), &[1, 2]).unwrap_err();
        assert_eq!(unknown.0, ErrorCode::EvaluationAnswersIncomplete);
    }

    async fn service_with_fixture() -> (EvaluationService, Fixture) {
        let storage = memory_storage().await;
        let fx = seed(&storage).await;
        let service = EvaluationService {
            storage: Some(Arc::new(storage)),
        };
        (service, fx)
    }

    fn student_request(fx: &Fixture) -> HttpRequest {
        let req = TestRequest::post().to_http_request();
        req.extensions_mut()
            .insert(Principal::Student(fx.student.clone()));
        req
    }

    fn full_submission(fx: &Fixture, assignment_id: i64) -> SubmitEvaluationRequest {
        SubmitEvaluationRequest {
            assignment_id,
            suggestion: None,
            answers: answers(&[(fx.question_ids[0], 4), (fx.question_ids[1], 5)]),
        }
    }

    async fn error_code(resp: HttpResponse) -> i64 {
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        json["code"].as_i64().unwrap()
    }

    #[actix_web::test]
    async fn test_submit_then_duplicate_is_conflict() {
        let (service, fx) = service_with_fixture().await;
        let req = student_request(&fx);

        let resp = submit_evaluation(&service, full_submission(&fx, fx.own[0].id), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = submit_evaluation(&service, full_submission(&fx, fx.own[0].id), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(
            error_code(resp).await,
            ErrorCode::EvaluationAlreadySubmitted as i64
        );
    }

    #[actix_web::test]
    async fn test_assignment_outside_classroom_is_rejected() {
        let (service, fx) = service_with_fixture().await;

        let req = student_request(&fx);
        let resp = submit_evaluation(&service, full_submission(&fx, fx.other.id), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error_code(resp).await,
            ErrorCode::AssignmentNotInClassroom as i64
        );
    }

    #[actix_web::test]
    async fn test_unknown_assignment_and_incomplete_answers() {
        let (service, fx) = service_with_fixture().await;
        let req = student_request(&fx);

        let resp = submit_evaluation(&service, full_submission(&fx, 9999), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let mut partial = full_submission(&fx, fx.own[1].id);
        partial.answers.pop();
        let resp = submit_evaluation(&service, partial, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error_code(resp).await,
            ErrorCode::EvaluationAnswersIncomplete as i64
        );
    }

    #[actix_web::test]
    async fn test_staff_cannot_submit() {
        let (service, fx) = service_with_fixture().await;
        let req = TestRequest::post().to_http_request();

        let resp = submit_evaluation(&service, full_submission(&fx, fx.own[0].id), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
