use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::CreateStudentRequest};
use crate::services::{
    bad_request, conflict, internal_error, require_admin, require_reference,
};
use crate::utils::validate::require_text;

pub async fn create_student(
    service: &StudentService,
    mut data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let normalized = require_text(&data.student_code, "student_code").and_then(|code| {
        Ok((
            code,
            require_text(&data.first_name, "first_name")?,
            require_text(&data.last_name, "last_name")?,
        ))
    });
    (data.student_code, data.first_name, data.last_name) = match normalized {
        Ok(fields) => fields,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    if let Some(classroom_id) = data.classroom_id
        && let Err(resp) = require_reference(
            storage.get_classroom_by_id(classroom_id).await,
            ErrorCode::ClassroomNotFound,
            "Classroom",
            classroom_id,
        )
    {
        return Ok(resp);
    }

    match storage.create_student(data).await {
        Ok(student) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(student, "Student created successfully"))),
        Err(e) if e.is_unique_violation() => Ok(conflict(
            ErrorCode::StudentCodeAlreadyExists,
            "Student code already exists",
        )),
        Err(e) => Ok(internal_error("Failed to create student", e)),
    }
}
