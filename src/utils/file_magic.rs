/// 导入文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetKind {
    Csv,
    Xlsx,
}

impl SpreadsheetKind {
    pub fn mime_type(&self) -> &'static str {
        match self {
            SpreadsheetKind::Csv => "text/csv; charset=utf-8",
            SpreadsheetKind::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SpreadsheetKind::Csv => "csv",
            SpreadsheetKind::Xlsx => "xlsx",
        }
    }
}

const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];
const OLE_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// 根据扩展名与魔术字节判断导入文件类型
///
/// `.xlsx` 必须是 ZIP 容器；`.csv` 或无扩展名时，内容不能是二进制容器。
/// 旧版 `.xls` 与其他扩展名一律拒绝。
pub fn detect_spreadsheet_kind(data: &[u8], file_name: &str) -> Option<SpreadsheetKind> {
    if data.is_empty() {
        return None;
    }
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" => data.starts_with(&ZIP_MAGIC).then_some(SpreadsheetKind::Xlsx),
        "csv" | "txt" | "" => {
            if data.starts_with(&ZIP_MAGIC) || data.starts_with(&OLE_MAGIC) {
                None
            } else {
                Some(SpreadsheetKind::Csv)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xlsx_requires_zip_magic() {
        let zip = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00];
        assert_eq!(
            detect_spreadsheet_kind(&zip, "students.XLSX"),
            Some(SpreadsheetKind::Xlsx)
        );
        assert_eq!(detect_spreadsheet_kind(b"a,b,c", "students.xlsx"), None);
    }

    #[test]
    fn test_csv_rejects_binary_containers() {
        assert_eq!(
            detect_spreadsheet_kind(b"student_code,first_name\n", "students.csv"),
            Some(SpreadsheetKind::Csv)
        );
        assert_eq!(detect_spreadsheet_kind(&OLE_MAGIC, "students.csv"), None);
        assert_eq!(detect_spreadsheet_kind(b"x", "legacy.xls"), None);
        assert_eq!(detect_spreadsheet_kind(b"", "empty.csv"), None);
    }

    #[test]
    fn test_mime_mapping() {
        assert_eq!(SpreadsheetKind::Csv.mime_type(), "text/csv; charset=utf-8");
        assert!(SpreadsheetKind::Xlsx.mime_type().contains("spreadsheetml"));
        assert_eq!(SpreadsheetKind::Xlsx.extension(), "xlsx");
    }
}
