use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode, classrooms::requests::UpdateClassroomRequest};
use crate::services::{bad_request, internal_error, not_found, require_admin};
use crate::utils::validate::optional_text;

pub async fn update_classroom(
    service: &ClassroomService,
    id: i64,
    mut data: UpdateClassroomRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    data.room_name = match optional_text(data.room_name.as_deref(), "room_name") {
        Ok(name) => name,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    if let Some(Some(level_id)) = data.level_id {
        match storage.get_level_by_id(level_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(bad_request(
                    ErrorCode::LevelNotFound,
                    format!("Level {level_id} does not exist"),
                ));
            }
            Err(e) => return Ok(internal_error("Failed to check level", e)),
        }
    }

    match storage.update_classroom(id, data).await {
        Ok(Some(classroom)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            classroom,
            "Classroom updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::ClassroomNotFound, "Classroom not found")),
        Err(e) => Ok(internal_error("Failed to update classroom", e)),
    }
}
