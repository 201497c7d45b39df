use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode, classrooms::requests::CreateClassroomRequest};
use crate::services::{bad_request, internal_error, require_admin};
use crate::utils::validate::require_text;

pub async fn create_classroom(
    service: &ClassroomService,
    mut data: CreateClassroomRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    data.room_name = match require_text(&data.room_name, "room_name") {
        Ok(name) => name,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    if let Some(level_id) = data.level_id {
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

    match storage.create_classroom(data).await {
        Ok(classroom) => Ok(HttpResponse::Created().json(ApiResponse::success(
            classroom,
            "Classroom created successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to create classroom", e)),
    }
}
