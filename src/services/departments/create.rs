use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::{ApiResponse, ErrorCode, departments::requests::CreateDepartmentRequest};
use crate::services::{bad_request, conflict, internal_error, require_admin};
use crate::utils::validate::require_text;

pub async fn create_department(
    service: &DepartmentService,
    mut data: CreateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    data.dept_name = match require_text(&data.dept_name, "dept_name") {
        Ok(name) => name,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    match storage.create_department(data).await {
        Ok(department) => Ok(HttpResponse::Created().json(ApiResponse::success(
            department,
            "Department created successfully",
        ))),
        Err(e) if e.is_unique_violation() => Ok(conflict(
            ErrorCode::DepartmentAlreadyExists,
            "Department name already exists",
        )),
        Err(e) => Ok(internal_error("Failed to create department", e)),
    }
}
