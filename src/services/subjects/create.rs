use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode, subjects::requests::CreateSubjectRequest};
use crate::services::{bad_request, conflict, internal_error, require_admin};
use crate::utils::validate::require_text;

pub async fn create_subject(
    service: &SubjectService,
    mut data: CreateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let fields = require_text(&data.subject_code, "subject_code")
        .and_then(|code| Ok((code, require_text(&data.subject_name, "subject_name")?)));
    (data.subject_code, data.subject_name) = match fields {
        Ok(fields) => fields,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    match storage.create_subject(data).await {
        Ok(subject) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(subject, "Subject created successfully"))),
        Err(e) if e.is_unique_violation() => Ok(conflict(
            ErrorCode::SubjectCodeAlreadyExists,
            "Subject code already exists",
        )),
        Err(e) => Ok(internal_error("Failed to create subject", e)),
    }
}
