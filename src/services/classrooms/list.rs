use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{
    ApiResponse,
    classrooms::requests::{ClassroomListParams, ClassroomListQuery},
};
use crate::services::internal_error;

pub async fn list_classrooms(
    service: &ClassroomService,
    query: ClassroomListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = ClassroomListQuery {
        page: Some(query.pagination.page),
        limit: Some(query.pagination.limit),
        level_id: query.level_id,
        search: query.search,
    };

    match storage.list_classrooms_with_pagination(list_query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::paginated(
            page,
            "Classroom list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve classroom list", e)),
    }
}
