use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseAssignmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found, require_admin};

// 评价记录级联删除
pub async fn delete_course_assignment(
    service: &CourseAssignmentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.delete_course_assignment(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Course assignment deleted successfully",
        ))),
        Ok(false) => Ok(not_found(
            ErrorCode::AssignmentNotFound,
            "Course assignment not found",
        )),
        Err(e) => Ok(internal_error("Failed to delete course assignment", e)),
    }
}
