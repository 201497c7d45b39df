//! 评价汇总接口

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use super::aggregate::{
    summarize_by_assignment, summarize_by_teacher, teacher_detail as build_teacher_detail,
};
use crate::models::{
    ApiResponse, ErrorCode,
    evaluations::requests::{EvaluationListQuery, SummaryParams},
};
use crate::services::{forbidden, internal_error, not_found, teacher_scope};

pub async fn summarize_assignments(
    service: &EvaluationService,
    query: SummaryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let scope = match teacher_scope(request) {
        Ok(scope) => scope,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);
    let list_query = EvaluationListQuery {
        classroom_id: query.classroom_id,
        teacher_id: scope,
        ..Default::default()
    };

    match storage.list_evaluation_details(list_query).await {
        Ok(details) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            summarize_by_assignment(&details),
            "Assignment summary retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to build assignment summary", e)),
    }
}

pub async fn summarize_teachers(
    service: &EvaluationService,
    query: SummaryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let scope = match teacher_scope(request) {
        Ok(scope) => scope,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);
    let list_query = EvaluationListQuery {
        classroom_id: query.classroom_id,
        teacher_id: scope,
        ..Default::default()
    };

    match storage.list_evaluation_details(list_query).await {
        Ok(details) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            summarize_by_teacher(&details),
            "Teacher summary retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to build teacher summary", e)),
    }
}

pub async fn teacher_detail(
    service: &EvaluationService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match teacher_scope(request) {
        Ok(Some(own)) if own != teacher_id => {
            return Ok(forbidden("You can only view your own evaluation results"));
        }
        Ok(_) => {}
        Err(resp) => return Ok(resp),
    }

    let storage = service.get_storage(request);

    let teacher = match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(teacher)) => teacher,
        Ok(None) => return Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => return Ok(internal_error("Failed to retrieve teacher", e)),
    };

    let list_query = EvaluationListQuery {
        teacher_id: Some(teacher_id),
        ..Default::default()
    };

    match storage.list_evaluation_details(list_query).await {
        Ok(details) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            build_teacher_detail(teacher, &details),
            "Teacher evaluation detail retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to build teacher detail", e)),
    }
}
