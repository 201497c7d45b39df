use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, teachers::requests::UpdateTeacherRequest};
use crate::services::{bad_request, internal_error, not_found, require_admin};
use crate::utils::validate::optional_text;

pub async fn update_teacher(
    service: &TeacherService,
    id: i64,
    mut data: UpdateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let names = optional_text(data.first_name.as_deref(), "first_name").and_then(|first| {
        Ok((first, optional_text(data.last_name.as_deref(), "last_name")?))
    });
    (data.first_name, data.last_name) = match names {
        Ok(names) => names,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    match storage.update_teacher(id, data).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(teacher, "Teacher updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => Ok(internal_error("Failed to update teacher", e)),
    }
}
