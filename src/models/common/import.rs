use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 导入单行错误
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[ts(export, export_to = "../frontend/src/types/generated/import.ts")]
pub struct ImportRowError {
    /// 数据行号（表头为第 1 行）
    pub row: usize,
    pub message: String,
}

// 导入结果汇总
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/import.ts")]
pub struct ImportSummary {
    pub total: usize,
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
    pub errors: Vec<ImportRowError>,
}

impl ImportSummary {
    pub fn row_error(&mut self, row: usize, message: impl Into<String>) {
        self.errors.push(ImportRowError {
            row,
            message: message.into(),
        });
    }
}
