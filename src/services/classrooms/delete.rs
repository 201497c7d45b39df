use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found, require_admin};

/// 删除教室，其授课安排随之删除，学生保留但不再关联教室
pub async fn delete_classroom(
    service: &ClassroomService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.delete_classroom(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Classroom deleted successfully",
        ))),
        Ok(false) => Ok(not_found(ErrorCode::ClassroomNotFound, "Classroom not found")),
        Err(e) => Ok(internal_error("Failed to delete classroom", e)),
    }
}
