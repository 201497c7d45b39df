use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    evaluations::responses::{PendingAssignment, PendingEvaluationsResponse},
};
use crate::services::{forbidden, internal_error};

/// 学生所在教室的全部授课安排，并标记是否已评价
pub async fn list_pending(
    service: &EvaluationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(student) = RequireJWT::extract_student(request) else {
        return Ok(forbidden("Only students can view pending evaluations"));
    };

    let storage = service.get_storage(request);

    let assignments = match student.classroom_id {
        Some(classroom_id) => match storage.list_course_assignments_by_classroom(classroom_id).await
        {
            Ok(assignments) => assignments,
            Err(e) => return Ok(internal_error("Failed to retrieve course assignments", e)),
        },
        None => Vec::new(),
    };

    let evaluated = match storage.list_evaluated_assignment_ids(student.id).await {
        Ok(ids) => ids,
        Err(e) => return Ok(internal_error("Failed to retrieve evaluated assignments", e)),
    };

    let questions = match storage.list_all_questions().await {
        Ok(questions) => questions,
        Err(e) => return Ok(internal_error("Failed to retrieve questions", e)),
    };

    let response = PendingEvaluationsResponse {
        assignments: assignments
            .into_iter()
            .map(|assignment| PendingAssignment {
                evaluated: evaluated.contains(&assignment.id),
                assignment,
            })
            .collect(),
        questions,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Pending evaluations retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::entities::Principal;
    use crate::models::evaluations::requests::{SubmitAnswer, SubmitEvaluationRequest};
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::testing::{memory_storage, seed};
    use actix_web::{HttpMessage, http::StatusCode, test::TestRequest};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_pending_marks_evaluated_assignments() {
        let storage = memory_storage().await;
        let fx = seed(&storage).await;
        storage
            .submit_evaluation(
                fx.student.id,
                SubmitEvaluationRequest {
                    assignment_id: fx.own[1].id,
                    suggestion: None,
                    answers: fx
                        .question_ids
                        .iter()
                        .map(|&question_id| SubmitAnswer {
                            question_id,
                            score: 3,
                        })
                        .collect(),
                },
            )
            .await
            .unwrap();

        let service = EvaluationService {
            storage: Some(Arc::new(storage)),
        };
        let req = TestRequest::get().to_http_request();
        req.extensions_mut()
            .insert(Principal::Student(fx.student.clone()));

        let resp = list_pending(&service, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let flags: Vec<(i64, bool)> = json["data"]["assignments"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| {
                (
                    item["assignment"]["id"].as_i64().unwrap(),
                    item["evaluated"].as_bool().unwrap(),
                )
            })
            .collect();
        // 只列出本教室的课，不含其他教室
        assert_eq!(flags.len(), 2);
        assert!(flags.contains(&(fx.own[0].id, false)));
        assert!(flags.contains(&(fx.own[1].id, true)));
        assert_eq!(json["data"]["questions"].as_array().unwrap().len(), 2);
    }
}
