//! 评价报表导出（CSV / XLSX）

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use rust_xlsxwriter::{Format, Workbook};
use tracing::{error, info};

use super::EvaluationService;
use crate::errors::Result;
use crate::models::{
    ApiResponse, ErrorCode,
    evaluations::{
        entities::EvaluationDetail,
        requests::{EvaluationListQuery, ExportFormat, ExportParams},
    },
};
use crate::services::{internal_error, teacher_scope};

const HEADERS: [&str; 6] = ["#", "date", "student", "subject", "classroom", "average"];

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 报表中的一行
#[derive(Debug, Clone, PartialEq)]
struct ReportRow {
    index: usize,
    date: String,
    student: String,
    subject: String,
    classroom: String,
    average: f64,
}

fn report_rows(details: &[EvaluationDetail]) -> Vec<ReportRow> {
    details
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let assignment = d.assignment.as_ref();
            ReportRow {
                index: i + 1,
                date: d.evaluation.eval_date.format("%Y-%m-%d").to_string(),
                student: d
                    .student
                    .as_ref()
                    .map(|s| s.full_name())
                    .unwrap_or_default(),
                subject: assignment
                    .and_then(|a| a.subject.as_ref())
                    .map(|s| s.subject_name.clone())
                    .unwrap_or_default(),
                classroom: assignment
                    .and_then(|a| a.classroom.as_ref())
                    .map(|c| c.room_name.clone())
                    .unwrap_or_else(|| "N/A".to_string()),
                average: d.average,
            }
        })
        .collect()
}

// 带 BOM，Excel 直接打开时泰文不乱码
fn write_csv(rows: &[ReportRow]) -> Result<Vec<u8>> {
    let mut buffer = b"\xEF\xBB\xBF".to_vec();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(HEADERS)?;
        for row in rows {
            writer.write_record([
                row.index.to_string(),
                row.date.clone(),
                row.student.clone(),
                row.subject.clone(),
                row.classroom.clone(),
                format!("{:.2}", row.average),
            ])?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

fn write_xlsx(rows: &[ReportRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let two_places = Format::new().set_num_format("0.00");

    let sheet = workbook.add_worksheet();
    sheet.set_name("Evaluations")?;
    for (col, title) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_number(r, 0, row.index as f64)?;
        sheet.write_string(r, 1, &row.date)?;
        sheet.write_string(r, 2, &row.student)?;
        sheet.write_string(r, 3, &row.subject)?;
        sheet.write_string(r, 4, &row.classroom)?;
        sheet.write_number_with_format(r, 5, row.average, &two_places)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// 导出评价报表，筛选条件与列表一致
pub async fn export_evaluations(
    service: &EvaluationService,
    query: ExportParams,
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
        search: query.search,
        ..Default::default()
    };

    let details = match storage.list_evaluation_details(list_query).await {
        Ok(details) => details,
        Err(e) => return Ok(internal_error("Failed to retrieve evaluations", e)),
    };
    let rows = report_rows(&details);

    let (bytes, mime, ext) = match query.format {
        ExportFormat::Csv => (write_csv(&rows), "text/csv; charset=utf-8", "csv"),
        ExportFormat::Xlsx => (write_xlsx(&rows), XLSX_MIME, "xlsx"),
    };
    let bytes = match bytes {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to export evaluations: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to export evaluations",
            )));
        }
    };

    let file_name = format!(
        "evaluations_{}.{ext}",
        chrono::Utc::now().format("%Y%m%d%H%M%S")
    );
    info!("Exported {} evaluations as {}", rows.len(), file_name);

    Ok(HttpResponse::Ok()
        .content_type(mime)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ))
        .body(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize, student: &str, average: f64) -> ReportRow {
        ReportRow {
            index,
            date: "2025-03-01".to_string(),
            student: student.to_string(),
            subject: "Mathematics".to_string(),
            classroom: "M.1/1".to_string(),
            average,
        }
    }

    #[test]
    fn test_csv_has_bom_header_and_two_decimals() {
        let rows = [row(1, "สมชาย ใจดี", 4.5), row(2, "Jane Doe", 3.0)];
        let bytes = write_csv(&rows).unwrap();
        assert!(bytes.starts_with(b"\xEF\xBB\xBF"));

        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "#,date,student,subject,classroom,average");
        assert_eq!(lines[1], "1,2025-03-01,สมชาย ใจดี,Mathematics,M.1/1,4.50");
        assert_eq!(lines[2], "2,2025-03-01,Jane Doe,Mathematics,M.1/1,3.00");
    }

    #[test]
    fn test_xlsx_is_zip_container() {
        let bytes = write_xlsx(&[row(1, "Jane Doe", 4.25)]).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_report_rows_fill_missing_relations() {
        use crate::models::evaluations::entities::Evaluation;

        let detail = EvaluationDetail::new(
            Evaluation {
                id: 1,
                student_id: 1,
                assignment_id: 1,
                eval_date: chrono::Utc::now(),
                suggestion: None,
            },
            None,
            None,
            Vec::new(),
        );
        let rows = report_rows(&[detail]);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].classroom, "N/A");
        assert_eq!(rows[0].student, "");
        assert_eq!(rows[0].average, 0.0);
    }
}
