use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseAssignmentService;
use crate::models::{
    ApiResponse, ErrorCode, course_assignments::requests::CreateCourseAssignmentRequest,
};
use crate::services::{
    bad_request, conflict, internal_error, require_admin, require_reference,
};
use crate::utils::validate::require_text;

pub async fn create_course_assignment(
    service: &CourseAssignmentService,
    mut data: CreateCourseAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    data.term = match require_text(&data.term, "term") {
        Ok(term) => term,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    let references = require_reference(
        storage.get_teacher_by_id(data.teacher_id).await,
        ErrorCode::TeacherNotFound,
        "Teacher",
        data.teacher_id,
    )
    .and(require_reference(
        storage.get_subject_by_id(data.subject_id).await,
        ErrorCode::SubjectNotFound,
        "Subject",
        data.subject_id,
    ))
    .and(require_reference(
        storage.get_classroom_by_id(data.classroom_id).await,
        ErrorCode::ClassroomNotFound,
        "Classroom",
        data.classroom_id,
    ));
    if let Err(resp) = references {
        return Ok(resp);
    }

    match storage.create_course_assignment(data).await {
        Ok(assignment) => Ok(HttpResponse::Created().json(ApiResponse::success(
            assignment,
            "Course assignment created successfully",
        ))),
        Err(e) if e.is_unique_violation() => Ok(conflict(
            ErrorCode::AssignmentAlreadyExists,
            "This teacher already teaches the subject in this classroom for the term",
        )),
        Err(e) => Ok(internal_error("Failed to create course assignment", e)),
    }
}
