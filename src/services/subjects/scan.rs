//! 课表识别

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::SubjectService;
use crate::models::{
    ApiResponse,
    subjects::{
        requests::{CreateSubjectRequest, SaveScannedSubjectsRequest, ScanSubjectsRequest},
        responses::SaveScannedSubjectsResponse,
    },
};
use crate::services::{internal_error, require_admin};
use crate::utils::extract_subjects;

pub async fn scan_subjects(
    data: ScanSubjectsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let subjects = extract_subjects(&data.text);
    debug!("Recognized {} subjects from scanned text", subjects.len());

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        subjects,
        "Subjects recognized successfully",
    )))
}

/// 保存识别结果，代码已存在的跳过
pub async fn save_scanned_subjects(
    service: &SubjectService,
    data: SaveScannedSubjectsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);
    let mut response = SaveScannedSubjectsResponse {
        created: Vec::new(),
        skipped: Vec::new(),
    };

    for item in data.items {
        let code = item.code.trim().to_string();
        let name = item.name.trim().to_string();
        if code.is_empty() || name.is_empty() {
            response.skipped.push(code);
            continue;
        }

        match storage.get_subject_by_code(&code).await {
            Ok(Some(_)) => {
                response.skipped.push(code);
                continue;
            }
            Ok(None) => {}
            Err(e) => return Ok(internal_error("Failed to check subject code", e)),
        }

        match storage
            .create_subject(CreateSubjectRequest {
                subject_code: code.clone(),
                subject_name: name,
            })
            .await
        {
            Ok(subject) => response.created.push(subject),
            // 同一批次内重复的代码
            Err(e) if e.is_unique_violation() => response.skipped.push(code),
            Err(e) => return Ok(internal_error("Failed to save scanned subjects", e)),
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Scanned subjects saved successfully",
    )))
}
