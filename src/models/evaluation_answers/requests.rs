use crate::models::common::deserialize_optional_i64;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_answer.ts")]
pub struct EvaluationAnswerListParams {
    #[serde(default, alias = "evalId", deserialize_with = "deserialize_optional_i64")]
    pub eval_id: Option<i64>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation_answer.ts")]
pub struct CreateEvaluationAnswerRequest {
    pub eval_id: i64,
    pub question_id: i64,
    pub score: i32,
}
