use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, teachers::requests::CreateTeacherRequest};
use crate::services::{bad_request, internal_error, require_admin};
use crate::utils::validate::require_text;

pub async fn create_teacher(
    service: &TeacherService,
    mut data: CreateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let names = require_text(&data.first_name, "first_name")
        .and_then(|first| Ok((first, require_text(&data.last_name, "last_name")?)));
    (data.first_name, data.last_name) = match names {
        Ok(names) => names,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    match storage.create_teacher(data).await {
        Ok(teacher) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(teacher, "Teacher created successfully"))),
        Err(e) => Ok(internal_error("Failed to create teacher", e)),
    }
}
