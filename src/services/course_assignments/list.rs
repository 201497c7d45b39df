use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseAssignmentService;
use crate::models::{
    ApiResponse,
    course_assignments::requests::{CourseAssignmentListParams, CourseAssignmentListQuery},
};
use crate::services::internal_error;

pub async fn list_course_assignments(
    service: &CourseAssignmentService,
    query: CourseAssignmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = CourseAssignmentListQuery {
        page: Some(query.pagination.page),
        limit: Some(query.pagination.limit),
        teacher_id: query.teacher_id,
        classroom_id: query.classroom_id,
        subject_id: query.subject_id,
        term: query.term.filter(|t| !t.trim().is_empty()),
        search: query.search,
    };

    match storage
        .list_course_assignments_with_pagination(list_query)
        .await
    {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::paginated(
            page,
            "Course assignment list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to retrieve course assignment list", e)),
    }
}
