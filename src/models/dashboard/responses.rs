use serde::Serialize;
use ts_rs::TS;

use crate::models::evaluations::entities::EvaluationDetail;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardTotals {
    pub students: u64,
    pub teachers: u64,
    pub assignments: u64,
    pub evaluations: u64,
}

// 管理端首页
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardResponse {
    pub totals: DashboardTotals,
    pub recent_evaluations: Vec<EvaluationDetail>,
}
