use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::{ApiResponse, ErrorCode, departments::requests::UpdateDepartmentRequest};
use crate::services::{bad_request, conflict, internal_error, not_found, require_admin};
use crate::utils::validate::optional_text;

pub async fn update_department(
    service: &DepartmentService,
    id: i64,
    mut data: UpdateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    data.dept_name = match optional_text(data.dept_name.as_deref(), "dept_name") {
        Ok(name) => name,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let storage = service.get_storage(request);

    match storage.update_department(id, data).await {
        Ok(Some(department)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            department,
            "Department updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::DepartmentNotFound, "Department not found")),
        Err(e) if e.is_unique_violation() => Ok(conflict(
            ErrorCode::DepartmentAlreadyExists,
            "Department name already exists",
        )),
        Err(e) => Ok(internal_error("Failed to update department", e)),
    }
}
