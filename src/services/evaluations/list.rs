use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use crate::models::{
    ApiResponse,
    evaluations::requests::{EvaluationListParams, EvaluationListQuery},
};
use crate::services::{internal_error, teacher_scope};

/// 评价列表，最新的在前
///
/// 教师账号只能看到自己授课安排下的评价。
pub async fn list_evaluations(
    service: &EvaluationService,
    query: EvaluationListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let scope = match teacher_scope(request) {
        Ok(scope) => scope,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let list_query = EvaluationListQuery {
        page: Some(query.pagination.page),
        limit: Some(query.pagination.limit),
        classroom_id: query.classroom_id,
        student_id: query.student_id,
        assignment_id: query.assignment_id,
        teacher_id: scope.or(query.teacher_id),
        search: query.search,
    };

    match storage.list_evaluations_with_pagination(list_query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::paginated(
            page,
            "Evaluation list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve evaluation list", e)),
    }
}
