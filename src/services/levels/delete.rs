use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LevelService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found, require_admin};

pub async fn delete_level(
    service: &LevelService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.delete_level(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Level deleted successfully",
        ))),
        Ok(false) => Ok(not_found(ErrorCode::LevelNotFound, "Level not found")),
        Err(e) => Ok(internal_error("Failed to delete level", e)),
    }
}
