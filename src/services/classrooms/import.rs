use std::collections::HashMap;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::ClassroomService;
use crate::models::{
    ApiResponse,
    classrooms::requests::CreateClassroomRequest,
    common::ImportSummary,
    students::requests::{CreateStudentRequest, UpdateStudentRequest},
};
use crate::services::import::read_import_table;
use crate::services::{bad_request, require_admin};

/// 导入学生名单
///
/// 教室按名称匹配，不存在时自动创建；学生按学号创建或更新。
pub async fn import_students(
    service: &ClassroomService,
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
    let [code_col, first_col, last_col, room_col] =
        match table.require_columns(["student_code", "first_name", "last_name", "room_name"]) {
            Ok(cols) => cols,
            Err(e) => return Ok(bad_request(e.error_code(), e.message())),
        };

    let storage = service.get_storage(request);
    let mut summary = ImportSummary {
        total: table.rows.len(),
        ..Default::default()
    };
    let mut classrooms: HashMap<String, i64> = HashMap::new();

    for row in &table.rows {
        let code = row.get(code_col);
        let first_name = row.get(first_col);
        let last_name = row.get(last_col);
        let room_name = row.get(room_col);

        if code.is_empty() || first_name.is_empty() || last_name.is_empty() || room_name.is_empty()
        {
            summary.skipped += 1;
            summary.row_error(
                row.row_num,
                "student_code, first_name, last_name and room_name are required",
            );
            continue;
        }

        let classroom_id = match classrooms.get(&room_name) {
            Some(id) => *id,
            None => {
                let found = match storage.get_classroom_by_name(&room_name).await {
                    Ok(Some(classroom)) => Ok(classroom),
                    Ok(None) => {
                        storage
                            .create_classroom(CreateClassroomRequest {
                                room_name: room_name.clone(),
                                level_id: None,
                            })
                            .await
                    }
                    Err(e) => Err(e),
                };
                match found {
                    Ok(classroom) => {
                        classrooms.insert(room_name.clone(), classroom.id);
                        classroom.id
                    }
                    Err(e) => {
                        warn!(
                            "Import row {}: classroom '{}' failed: {}",
                            row.row_num, room_name, e
                        );
                        summary.skipped += 1;
                        summary.row_error(
                            row.row_num,
                            format!("Cannot resolve classroom '{room_name}'"),
                        );
                        continue;
                    }
                }
            }
        };

        let result = match storage.get_student_by_code(&code).await {
            Ok(Some(existing)) => storage
                .update_student(
                    existing.id,
                    UpdateStudentRequest {
                        student_code: None,
                        first_name: Some(first_name),
                        last_name: Some(last_name),
                        classroom_id: Some(Some(classroom_id)),
                    },
                )
                .await
                .map(|_| false),
            Ok(None) => storage
                .create_student(CreateStudentRequest {
                    student_code: code.clone(),
                    first_name,
                    last_name,
                    classroom_id: Some(classroom_id),
                })
                .await
                .map(|_| true),
            Err(e) => Err(e),
        };

        match result {
            Ok(true) => summary.created += 1,
            Ok(false) => summary.updated += 1,
            Err(e) => {
                warn!("Import row {}: student '{}' failed: {}", row.row_num, code, e);
                summary.skipped += 1;
                summary.row_error(row.row_num, format!("Cannot save student '{code}'"));
            }
        }
    }

    info!(
        "Student import finished: total={}, created={}, updated={}, skipped={}",
        summary.total, summary.created, summary.updated, summary.skipped
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "Student import finished")))
}
