//! CSV / XLSX 表格读取
//!
//! 首行为表头（大小写不敏感），其余行按列名取值。

use calamine::{Reader, Xlsx};
use std::collections::HashMap;
use std::io::Cursor;

use super::file_magic::SpreadsheetKind;
use crate::models::ErrorCode;

/// 表格解析错误
#[derive(Debug)]
pub enum TableParseError {
    MissingColumn(String),
    ParseFailed(String),
    EmptyFile,
}

impl TableParseError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingColumn(_) => ErrorCode::ImportFileMissingColumn,
            Self::ParseFailed(_) => ErrorCode::ImportFileParseFailed,
            Self::EmptyFile => ErrorCode::ImportFileDataInvalid,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::MissingColumn(col) => format!("Missing required column: {col}"),
            Self::ParseFailed(msg) => msg.clone(),
            Self::EmptyFile => "The file contains no data".to_string(),
        }
    }
}

/// 一行数据，`row_num` 为文件中的行号（表头为第 1 行）
#[derive(Debug, Clone)]
pub struct TableRow {
    pub row_num: usize,
    cells: Vec<String>,
}

/// 解析后的表格
#[derive(Debug)]
pub struct Table {
    header: HashMap<String, usize>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn parse(data: &[u8], kind: SpreadsheetKind) -> Result<Self, TableParseError> {
        let mut raw = match kind {
            SpreadsheetKind::Csv => read_csv(data)?,
            SpreadsheetKind::Xlsx => read_xlsx(data)?,
        }
        .into_iter();

        let header_row = raw.next().ok_or(TableParseError::EmptyFile)?;
        let header = header_row
            .1
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().trim_start_matches('\u{feff}').to_lowercase(), i))
            .collect();

        let rows = raw
            // 全空行忽略
            .filter(|(_, cells)| cells.iter().any(|c| !c.trim().is_empty()))
            .map(|(row_num, cells)| TableRow { row_num, cells })
            .collect();

        Ok(Self { header, rows })
    }

    /// 校验必需列并返回列下标
    pub fn require_columns<const N: usize>(
        &self,
        names: [&str; N],
    ) -> Result<[usize; N], TableParseError> {
        let mut indices = [0usize; N];
        for (slot, name) in indices.iter_mut().zip(names) {
            *slot = *self
                .header
                .get(name)
                .ok_or_else(|| TableParseError::MissingColumn(name.to_string()))?;
        }
        Ok(indices)
    }
}

impl TableRow {
    /// 取单元格并去除首尾空白
    pub fn get(&self, idx: usize) -> String {
        self.cells
            .get(idx)
            .map(|c| c.trim().to_string())
            .unwrap_or_default()
    }
}

/// (行号, 单元格)
type RawRow = (usize, Vec<String>);

fn read_csv(data: &[u8]) -> Result<Vec<RawRow>, TableParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(data));

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result
            .map_err(|e| TableParseError::ParseFailed(format!("Row {} parse failed: {e}", i + 1)))?;
        // csv 会跳过空行，行号以读取位置为准
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 1);
        rows.push((line, record.iter().map(str::to_string).collect()));
    }
    Ok(rows)
}

fn read_xlsx(data: &[u8]) -> Result<Vec<RawRow>, TableParseError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(data))
        .map_err(|e| TableParseError::ParseFailed(format!("Failed to open XLSX: {e}")))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let sheet_name = sheet_names
        .first()
        .ok_or_else(|| TableParseError::ParseFailed("Workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| TableParseError::ParseFailed(format!("Failed to read sheet: {e}")))?;

    // Range 从首个非空单元格开始，行号以其起点为准
    let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);
    Ok(range
        .rows()
        .enumerate()
        .map(|(i, row)| {
            (
                first_row + i + 1,
                row.iter().map(|cell| cell.to_string()).collect(),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_header_lookup_is_case_insensitive() {
        let data = "\u{feff}Student_Code, First_Name ,last_name,room_name\n65001,สมชาย,ใจดี,ม.1/1\n";
        let table = Table::parse(data.as_bytes(), SpreadsheetKind::Csv).unwrap();
        let [code, first, last, room] = table
            .require_columns(["student_code", "first_name", "last_name", "room_name"])
            .unwrap();
        let row = &table.rows[0];
        assert_eq!(row.row_num, 2);
        assert_eq!(row.get(code), "65001");
        assert_eq!(row.get(first), "สมชาย");
        assert_eq!(row.get(last), "ใจดี");
        assert_eq!(row.get(room), "ม.1/1");
    }

    #[test]
    fn test_missing_column_reported() {
        let table = Table::parse(b"first_name\nA\n", SpreadsheetKind::Csv).unwrap();
        let err = table
            .require_columns(["first_name", "last_name"])
            .unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::ImportFileMissingColumn);
        assert!(err.message().contains("last_name"));
    }

    #[test]
    fn test_blank_rows_skipped_and_short_rows_padded() {
        let data = b"first_name,last_name\n\n , \nAnn\n";
        let table = Table::parse(data, SpreadsheetKind::Csv).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].row_num, 4);
        assert_eq!(table.rows[0].get(1), "");
    }

    #[test]
    fn test_empty_file() {
        let err = Table::parse(b"", SpreadsheetKind::Csv).unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::ImportFileDataInvalid);
    }
}
