use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{
    ApiResponse,
    teachers::requests::{TeacherListParams, TeacherListQuery},
};
use crate::services::internal_error;

pub async fn list_teachers(
    service: &TeacherService,
    query: TeacherListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = TeacherListQuery {
        page: Some(query.pagination.page),
        limit: Some(query.pagination.limit),
        search: query.search,
    };

    match storage.list_teachers_with_pagination(list_query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::paginated(
            page,
            "Teacher list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve teacher list", e)),
    }
}
