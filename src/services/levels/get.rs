use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LevelService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found};

pub async fn get_level(
    service: &LevelService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_level_by_id(id).await {
        Ok(Some(level)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(level, "Level retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::LevelNotFound, "Level not found")),
        Err(e) => Ok(internal_error("Failed to retrieve level", e)),
    }
}

pub async fn find_level_by_name(
    service: &LevelService,
    name: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_level_by_name(&name).await {
        Ok(Some(level)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(level, "Level retrieved successfully"))),
        Ok(None) => Ok(not_found(
            ErrorCode::LevelNotFound,
            format!("Level '{}' not found", name.trim()),
        )),
        Err(e) => Ok(internal_error("Failed to retrieve level", e)),
    }
}
