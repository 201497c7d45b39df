//! 导入文件的公共读取流程
//!
//! 读取 multipart、校验文件类型与大小、解析表格并限制行数。

use actix_multipart::Multipart;
use actix_web::HttpResponse;

use super::bad_request;
use crate::config::AppConfig;
use crate::models::ErrorCode;
use crate::utils::detect_spreadsheet_kind;
use crate::utils::multipart::{UploadForm, read_upload_form};
use crate::utils::tabular::Table;

pub(crate) async fn read_import_table(
    payload: &mut Multipart,
) -> Result<(UploadForm, Table), HttpResponse> {
    let config = &AppConfig::get().import;

    let form = read_upload_form(payload, config.max_file_size)
        .await
        .map_err(|e| bad_request(e.error_code(), e.message()))?;

    let kind = detect_spreadsheet_kind(&form.file_bytes, &form.file_name).ok_or_else(|| {
        bad_request(
            ErrorCode::FileTypeNotAllowed,
            "Only .csv and .xlsx files are supported",
        )
    })?;

    let table = Table::parse(&form.file_bytes, kind)
        .map_err(|e| bad_request(e.error_code(), e.message()))?;

    if table.rows.is_empty() {
        return Err(bad_request(
            ErrorCode::ImportFileDataInvalid,
            "The file contains no data rows",
        ));
    }
    if table.rows.len() > config.max_rows {
        return Err(bad_request(
            ErrorCode::ImportTooManyRows,
            format!("At most {} rows can be imported at once", config.max_rows),
        ));
    }

    Ok((form, table))
}
