use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, teachers::requests::TeacherLookupQuery};
use crate::services::{internal_error, not_found};

pub async fn get_teacher(
    service: &TeacherService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_teacher_by_id(id).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(teacher, "Teacher retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => Ok(internal_error("Failed to retrieve teacher", e)),
    }
}

// 姓与名都需完全一致
pub async fn find_teacher(
    service: &TeacherService,
    query: TeacherLookupQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let first_name = query.first_name.trim();
    let last_name = query.last_name.trim();

    match storage.get_teacher_by_name(first_name, last_name).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(teacher, "Teacher retrieved successfully"))),
        Ok(None) => Ok(not_found(
            ErrorCode::TeacherNotFound,
            format!("Teacher '{first_name} {last_name}' not found"),
        )),
        Err(e) => Ok(internal_error("Failed to retrieve teacher", e)),
    }
}
