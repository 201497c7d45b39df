use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{
    ApiResponse, ErrorCode, PaginationQuery, students::requests::StudentListQuery,
};
use crate::services::{internal_error, not_found};

pub async fn list_classroom_students(
    service: &ClassroomService,
    classroom_id: i64,
    query: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_classroom_by_id(classroom_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::ClassroomNotFound, "Classroom not found")),
        Err(e) => return Ok(internal_error("Failed to retrieve classroom", e)),
    }

    let list_query = StudentListQuery {
        page: Some(query.page),
        limit: Some(query.limit),
        classroom_id: Some(classroom_id),
        search: None,
    };

    match storage.list_students_with_pagination(list_query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::paginated(
            page,
            "Classroom students retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve classroom students", e)),
    }
}
