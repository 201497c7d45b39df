use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseAssignmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found};

pub async fn get_course_assignment(
    service: &CourseAssignmentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_assignment_by_id(id).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Course assignment retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(
            ErrorCode::AssignmentNotFound,
            "Course assignment not found",
        )),
        Err(e) => Ok(internal_error("Failed to retrieve course assignment", e)),
    }
}
