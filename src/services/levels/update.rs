use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LevelService;
use crate::models::{ApiResponse, ErrorCode, levels::requests::UpdateLevelRequest};
use crate::services::{bad_request, internal_error, not_found, require_admin};
use crate::utils::validate::optional_text;

pub async fn update_level(
    service: &LevelService,
    id: i64,
    mut data: UpdateLevelRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    data.level_name = match optional_text(data.level_name.as_deref(), "level_name") {
        Ok(name) => name,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    if let Some(Some(department_id)) = data.department_id {
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

    match storage.update_level(id, data).await {
        Ok(Some(level)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(level, "Level updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::LevelNotFound, "Level not found")),
        Err(e) => Ok(internal_error("Failed to update level", e)),
    }
}
