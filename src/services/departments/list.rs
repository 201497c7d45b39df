use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::{
    ApiResponse,
    departments::requests::{DepartmentListParams, DepartmentListQuery},
};
use crate::services::internal_error;

pub async fn list_departments(
    service: &DepartmentService,
    query: DepartmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = DepartmentListQuery {
        page: Some(query.pagination.page),
        limit: Some(query.pagination.limit),
        search: query.search,
    };

    match storage.list_departments_with_pagination(list_query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::paginated(
            page,
            "Department list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve department list", e)),
    }
}
