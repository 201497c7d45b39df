use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseAssignmentService;
use crate::models::{
    ApiResponse, ErrorCode, course_assignments::requests::UpdateCourseAssignmentRequest,
};
use crate::services::{
    bad_request, conflict, internal_error, not_found, require_admin, require_reference,
};
use crate::utils::validate::optional_text;

pub async fn update_course_assignment(
    service: &CourseAssignmentService,
    id: i64,
    mut data: UpdateCourseAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    data.term = match optional_text(data.term.as_deref(), "term") {
        Ok(term) => term,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    if let Some(teacher_id) = data.teacher_id
        && let Err(resp) = require_reference(
            storage.get_teacher_by_id(teacher_id).await,
            ErrorCode::TeacherNotFound,
            "Teacher",
            teacher_id,
        )
    {
        return Ok(resp);
    }
    if let Some(subject_id) = data.subject_id
        && let Err(resp) = require_reference(
            storage.get_subject_by_id(subject_id).await,
            ErrorCode::SubjectNotFound,
            "Subject",
            subject_id,
        )
    {
        return Ok(resp);
    }
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

    match storage.update_course_assignment(id, data).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Course assignment updated successfully",
        ))),
        Ok(None) => Ok(not_found(
            ErrorCode::AssignmentNotFound,
            "Course assignment not found",
        )),
        Err(e) if e.is_unique_violation() => Ok(conflict(
            ErrorCode::AssignmentAlreadyExists,
            "This teacher already teaches the subject in this classroom for the term",
        )),
        Err(e) => Ok(internal_error("Failed to update course assignment", e)),
    }
}
