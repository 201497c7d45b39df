use serde::Serialize;
use ts_rs::TS;

use super::entities::Subject;

// 批量保存识别结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SaveScannedSubjectsResponse {
    pub created: Vec<Subject>,
    /// 已存在而跳过的科目代码
    pub skipped: Vec<String>,
}
