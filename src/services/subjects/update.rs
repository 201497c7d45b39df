use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode, subjects::requests::UpdateSubjectRequest};
use crate::services::{bad_request, conflict, internal_error, not_found, require_admin};
use crate::utils::validate::optional_text;

pub async fn update_subject(
    service: &SubjectService,
    id: i64,
    mut data: UpdateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let fields = optional_text(data.subject_code.as_deref(), "subject_code").and_then(|code| {
        Ok((code, optional_text(data.subject_name.as_deref(), "subject_name")?))
    });
    (data.subject_code, data.subject_name) = match fields {
        Ok(fields) => fields,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    match storage.update_subject(id, data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(subject, "Subject updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) if e.is_unique_violation() => Ok(conflict(
            ErrorCode::SubjectCodeAlreadyExists,
            "Subject code already exists",
        )),
        Err(e) => Ok(internal_error("Failed to update subject", e)),
    }
}
