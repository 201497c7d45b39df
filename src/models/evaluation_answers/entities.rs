use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::evaluation_questions::entities::EvaluationQuestion;

/// 单项评分范围
pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;

// 评价中的单项得分
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_answer.ts")]
pub struct EvaluationAnswer {
    pub id: i64,
    pub eval_id: i64,
    pub question_id: i64,
    pub score: i32,
    pub question: Option<EvaluationQuestion>,
}

pub fn is_valid_score(score: i32) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}
