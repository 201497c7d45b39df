use std::collections::HashSet;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::TeacherService;
use crate::models::{
    ApiResponse, common::ImportSummary, teachers::requests::CreateTeacherRequest,
};
use crate::services::import::read_import_table;
use crate::services::{bad_request, require_admin};

/// 导入教师名单，已存在的姓名组合与文件内重复行均跳过
pub async fn import_teachers(
    service: &TeacherService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let (_, table) = match read_import_table(&mut payload).await {
        Ok(parsed) => parsed,
        Err(resp) => return Ok(resp),
    };
    let [first_col, last_col] = match table.require_columns(["first_name", "last_name"]) {
        Ok(cols) => cols,
        Err(e) => return Ok(bad_request(e.error_code(), e.message())),
    };

    let storage = service.get_storage(request);
    let mut summary = ImportSummary {
        total: table.rows.len(),
        ..Default::default()
    };
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for row in &table.rows {
        let first_name = row.get(first_col);
        let last_name = row.get(last_col);

        if first_name.is_empty() || last_name.is_empty() {
            summary.skipped += 1;
            summary.row_error(row.row_num, "first_name and last_name are required");
            continue;
        }
        if !seen.insert((first_name.clone(), last_name.clone())) {
            summary.skipped += 1;
            continue;
        }

        match storage.get_teacher_by_name(&first_name, &last_name).await {
            Ok(Some(_)) => {
                summary.skipped += 1;
                continue;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Import row {}: teacher lookup failed: {}", row.row_num, e);
                summary.skipped += 1;
                summary.row_error(row.row_num, "Cannot check existing teacher");
                continue;
            }
        }

        match storage
            .create_teacher(CreateTeacherRequest {
                first_name,
                last_name,
            })
            .await
        {
            Ok(_) => summary.created += 1,
            Err(e) => {
                warn!("Import row {}: create teacher failed: {}", row.row_num, e);
                summary.skipped += 1;
                summary.row_error(row.row_num, "Cannot save teacher");
            }
        }
    }

    info!(
        "Teacher import finished: total={}, created={}, skipped={}",
        summary.total, summary.created, summary.skipped
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "Teacher import finished")))
}
