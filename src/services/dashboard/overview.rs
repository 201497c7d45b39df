use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::models::{ApiResponse, dashboard::responses::DashboardResponse};
use crate::services::{internal_error, require_admin};

/// 首页展示的最近评价条数
const RECENT_EVALUATIONS: u64 = 10;

pub async fn get_overview(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    let totals = match storage.dashboard_totals().await {
        Ok(totals) => totals,
        Err(e) => return Ok(internal_error("Failed to count records", e)),
    };
    let recent_evaluations = match storage.list_recent_evaluations(RECENT_EVALUATIONS).await {
        Ok(recent) => recent,
        Err(e) => return Ok(internal_error("Failed to retrieve recent evaluations", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DashboardResponse {
            totals,
            recent_evaluations,
        },
        "Dashboard retrieved successfully",
    )))
}
