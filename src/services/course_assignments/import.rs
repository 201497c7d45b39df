use std::collections::HashMap;
use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::CourseAssignmentService;
use crate::errors::Result;
use crate::models::{
    ApiResponse, ErrorCode,
    common::ImportSummary,
    course_assignments::requests::CreateCourseAssignmentRequest,
    subjects::requests::CreateSubjectRequest,
    teachers::requests::CreateTeacherRequest,
};
use crate::services::import::read_import_table;
use crate::services::{bad_request, require_admin};
use crate::storage::Storage;
use crate::utils::subject_scan::PLACEHOLDER_SUBJECT_NAME;

const COLUMNS: [&str; 5] = [
    "subject_code",
    "subject_name",
    "teacher_first_name",
    "teacher_last_name",
    "room_name",
];

/// 导入过程中已解析的引用，避免重复查询
#[derive(Default)]
struct Resolved {
    classrooms: HashMap<String, Option<i64>>,
    subjects: HashMap<String, i64>,
    teachers: HashMap<(String, String), i64>,
}

impl Resolved {
    async fn classroom(&mut self, storage: &Arc<dyn Storage>, name: &str) -> Result<Option<i64>> {
        if let Some(id) = self.classrooms.get(name) {
            return Ok(*id);
        }
        let id = storage.get_classroom_by_name(name).await?.map(|c| c.id);
        self.classrooms.insert(name.to_string(), id);
        Ok(id)
    }

    // 不存在时创建，名称为空则使用占位名
    async fn subject(&mut self, storage: &Arc<dyn Storage>, code: &str, name: &str) -> Result<i64> {
        if let Some(id) = self.subjects.get(code) {
            return Ok(*id);
        }
        let id = match storage.get_subject_by_code(code).await? {
            Some(subject) => subject.id,
            None => {
                let subject_name = if name.is_empty() {
                    PLACEHOLDER_SUBJECT_NAME.to_string()
                } else {
                    name.to_string()
                };
                storage
                    .create_subject(CreateSubjectRequest {
                        subject_code: code.to_string(),
                        subject_name,
                    })
                    .await?
                    .id
            }
        };
        self.subjects.insert(code.to_string(), id);
        Ok(id)
    }

    async fn teacher(
        &mut self,
        storage: &Arc<dyn Storage>,
        first: &str,
        last: &str,
    ) -> Result<i64> {
        let key = (first.to_string(), last.to_string());
        if let Some(id) = self.teachers.get(&key) {
            return Ok(*id);
        }
        let id = match storage.get_teacher_by_name(first, last).await? {
            Some(teacher) => teacher.id,
            None => {
                storage
                    .create_teacher(CreateTeacherRequest {
                        first_name: key.0.clone(),
                        last_name: key.1.clone(),
                    })
                    .await?
                    .id
            }
        };
        self.teachers.insert(key, id);
        Ok(id)
    }
}

/// 导入授课安排
///
/// 缺失的科目与教师会自动创建；教室必须已存在，否则记为行错误。
pub async fn import_course_assignments(
    service: &CourseAssignmentService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_admin(request) {
        return Ok(resp);
    }

    let (form, table) = match read_import_table(&mut payload).await {
        Ok(parsed) => parsed,
        Err(resp) => return Ok(resp),
    };
    let term = match form.field("term").map(str::trim).filter(|t| !t.is_empty()) {
        Some(term) => term.to_string(),
        None => {
            return Ok(bad_request(
                ErrorCode::BadRequest,
                "The term field is required",
            ));
        }
    };
    let [code_col, name_col, first_col, last_col, room_col] = match table.require_columns(COLUMNS)
    {
        Ok(cols) => cols,
        Err(e) => return Ok(bad_request(e.error_code(), e.message())),
    };

    let storage = service.get_storage(request);
    let mut summary = ImportSummary {
        total: table.rows.len(),
        ..Default::default()
    };
    let mut resolved = Resolved::default();

    for row in &table.rows {
        let subject_code = row.get(code_col);
        let subject_name = row.get(name_col);
        let first_name = row.get(first_col);
        let last_name = row.get(last_col);
        let room_name = row.get(room_col);

        if subject_code.is_empty()
            || first_name.is_empty()
            || last_name.is_empty()
            || room_name.is_empty()
        {
            summary.skipped += 1;
            summary.row_error(
                row.row_num,
                "subject_code, teacher_first_name, teacher_last_name and room_name are required",
            );
            continue;
        }

        let classroom_id = match resolved.classroom(&storage, &room_name).await {
            Ok(Some(id)) => id,
            Ok(None) => {
                summary.skipped += 1;
                summary.row_error(row.row_num, format!("Classroom '{room_name}' does not exist"));
                continue;
            }
            Err(e) => {
                warn!("Import row {}: classroom lookup failed: {}", row.row_num, e);
                summary.skipped += 1;
                summary.row_error(row.row_num, "Cannot resolve classroom");
                continue;
            }
        };

        let ids = match resolved
            .subject(&storage, &subject_code, &subject_name)
            .await
        {
            Ok(subject_id) => resolved
                .teacher(&storage, &first_name, &last_name)
                .await
                .map(|teacher_id| (subject_id, teacher_id)),
            Err(e) => Err(e),
        };
        let (subject_id, teacher_id) = match ids {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Import row {}: subject/teacher failed: {}", row.row_num, e);
                summary.skipped += 1;
                summary.row_error(row.row_num, "Cannot resolve subject or teacher");
                continue;
            }
        };

        match storage
            .find_course_assignment(teacher_id, subject_id, classroom_id, &term)
            .await
        {
            Ok(Some(_)) => {
                summary.skipped += 1;
                continue;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Import row {}: assignment lookup failed: {}", row.row_num, e);
                summary.skipped += 1;
                summary.row_error(row.row_num, "Cannot check existing assignment");
                continue;
            }
        }

        match storage
            .create_course_assignment(CreateCourseAssignmentRequest {
                teacher_id,
                subject_id,
                classroom_id,
                term: term.clone(),
            })
            .await
        {
            Ok(_) => summary.created += 1,
            Err(e) => {
                warn!("Import row {}: create assignment failed: {}", row.row_num, e);
                summary.skipped += 1;
                summary.row_error(row.row_num, "Cannot save course assignment");
            }
        }
    }

    info!(
        "Course assignment import finished: term={}, total={}, created={}, skipped={}",
        term, summary.total, summary.created, summary.skipped
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        summary,
        "Course assignment import finished",
    )))
}
