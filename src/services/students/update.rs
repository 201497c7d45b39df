use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::UpdateStudentRequest};
use crate::services::{
    bad_request, conflict, internal_error, not_found, require_admin, require_reference,
};
use crate::utils::validate::optional_text;

pub async fn update_student(
    service: &StudentService,
    id: i64,
    mut data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let normalized = optional_text(data.student_code.as_deref(), "student_code").and_then(|code| {
        Ok((
            code,
            optional_text(data.first_name.as_deref(), "first_name")?,
            optional_text(data.last_name.as_deref(), "last_name")?,
        ))
    });
    (data.student_code, data.first_name, data.last_name) = match normalized {
        Ok(fields) => fields,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    if let Some(Some(classroom_id)) = data.classroom_id
        && let Err(resp) = require_reference(
            storage.get_classroom_by_id(classroom_id).await,
            ErrorCode::ClassroomNotFound,
            "Classroom",
            classroom_id,
        )
    {
        return Ok(resp);
    }

    match storage.update_student(id, data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(student, "Student updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) if e.is_unique_violation() => Ok(conflict(
            ErrorCode::StudentCodeAlreadyExists,
            "Student code already exists",
        )),
        Err(e) => Ok(internal_error("Failed to update student", e)),
    }
}
