use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationQuestionService;
use crate::models::{
    ApiResponse,
    evaluation_questions::requests::{EvaluationQuestionListParams, EvaluationQuestionListQuery},
};
use crate::services::internal_error;

// 按 ID 排序，即评价表中的题目顺序
pub async fn list_questions(
    service: &EvaluationQuestionService,
    query: EvaluationQuestionListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = EvaluationQuestionListQuery {
        page: Some(query.pagination.page),
        limit: Some(query.pagination.limit),
        search: query.search,
    };

    match storage.list_questions_with_pagination(list_query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::paginated(
            page,
            "Question list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve question list", e)),
    }
}
