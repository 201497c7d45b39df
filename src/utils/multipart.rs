//! multipart 上传读取

use actix_multipart::Multipart;
use futures_util::StreamExt;
use std::collections::HashMap;

use crate::models::ErrorCode;

/// 上传读取错误
#[derive(Debug)]
pub enum UploadError {
    TooLarge(usize),
    Malformed(String),
    MissingFile,
}

impl UploadError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::TooLarge(_) => ErrorCode::FileSizeExceeded,
            Self::Malformed(_) | Self::MissingFile => ErrorCode::ImportFileMissing,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::TooLarge(limit) => format!("File exceeds the {limit} byte limit"),
            Self::Malformed(msg) => msg.clone(),
            Self::MissingFile => "No file field found".to_string(),
        }
    }
}

/// 上传表单：一个文件字段加若干文本字段
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file_name: String,
    pub file_bytes: Vec<u8>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

/// 读取 multipart，文件字段名为 `file`，超过 `max_file_size` 立即中止
pub async fn read_upload_form(
    payload: &mut Multipart,
    max_file_size: usize,
) -> Result<UploadForm, UploadError> {
    let mut form = UploadForm::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| UploadError::Malformed(format!("Failed to read field: {e}")))?;
        let name = field.name().unwrap_or_default().to_string();

        if name == "file" {
            if let Some(content_disposition) = field.content_disposition() {
                form.file_name = content_disposition
                    .get_filename()
                    .unwrap_or("upload.csv")
                    .to_string();
            }
            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| {
                    UploadError::Malformed(format!("Failed to read file data: {e}"))
                })?;
                if form.file_bytes.len() + data.len() > max_file_size {
                    return Err(UploadError::TooLarge(max_file_size));
                }
                form.file_bytes.extend_from_slice(&data);
            }
        } else {
            let mut value = Vec::new();
            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| {
                    UploadError::Malformed(format!("Failed to read field {name}: {e}"))
                })?;
                value.extend_from_slice(&data);
            }
            form.fields
                .insert(name, String::from_utf8_lossy(&value).into_owned());
        }
    }

    if form.file_bytes.is_empty() {
        return Err(UploadError::MissingFile);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_multipart::test::create_form_data_payload_and_headers;
    use actix_web::{error::PayloadError, web::Bytes};

    fn multipart(field: &str, content: &'static [u8]) -> Multipart {
        let (body, headers) = create_form_data_payload_and_headers(
            field,
            Some("students.csv".to_string()),
            None,
            Bytes::from_static(content),
        );
        let stream = futures_util::stream::iter(vec![Ok::<_, PayloadError>(body)]);
        Multipart::new(&headers, stream)
    }

    #[actix_web::test]
    async fn test_reads_file_field() {
        let mut payload = multipart("file", b"student_code\n65001\n");
        let form = read_upload_form(&mut payload, 1024).await.unwrap();
        assert_eq!(form.file_name, "students.csv");
        assert_eq!(form.file_bytes, b"student_code\n65001\n");
    }

    #[actix_web::test]
    async fn test_oversized_file_is_typed_error() {
        let mut payload = multipart("file", b"0123456789abcdef");
        let err = read_upload_form(&mut payload, 8).await.unwrap_err();
        assert!(matches!(err, UploadError::TooLarge(8)));
        assert_eq!(err.error_code(), ErrorCode::FileSizeExceeded);
    }

    #[actix_web::test]
    async fn test_missing_file_field() {
        let mut payload = multipart("attachment", b"65001");
        let err = read_upload_form(&mut payload, 1024).await.unwrap_err();
        assert!(matches!(err, UploadError::MissingFile));
        assert_eq!(err.error_code(), ErrorCode::ImportFileMissing);
    }
}
