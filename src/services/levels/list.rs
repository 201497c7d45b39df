use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LevelService;
use crate::models::{
    ApiResponse,
    levels::requests::{LevelListParams, LevelListQuery},
};
use crate::services::internal_error;

pub async fn list_levels(
    service: &LevelService,
    query: LevelListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = LevelListQuery {
        page: Some(query.pagination.page),
        limit: Some(query.pagination.limit),
        department_id: query.department_id,
        search: query.search,
    };

    match storage.list_levels_with_pagination(list_query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::paginated(
            page,
            "Level list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve level list", e)),
    }
}
