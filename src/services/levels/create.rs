use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LevelService;
use crate::models::{ApiResponse, ErrorCode, levels::requests::CreateLevelRequest};
use crate::services::{bad_request, internal_error, require_admin};
use crate::utils::validate::require_text;

pub async fn create_level(
    service: &LevelService,
    mut data: CreateLevelRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    data.level_name = match require_text(&data.level_name, "level_name") {
        Ok(name) => name,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    if let Some(department_id) = data.department_id {
        match storage.get_department_by_id(department_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(bad_request(
                    ErrorCode::DepartmentNotFound,
                    format!("Department {department_id} does not exist"),
                ));
            }
            Err(e) => return Ok(internal_error("Failed to check department", e)),
        }
    }

    match storage.create_level(data).await {
        Ok(level) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(level, "Level created successfully"))),
        Err(e) => Ok(internal_error("Failed to create level", e)),
    }
}
