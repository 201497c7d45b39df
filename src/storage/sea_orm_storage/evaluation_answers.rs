use std::collections::HashMap;

use super::{SeaOrmStorage, unique_ids};
use crate::entity::evaluation_answers::{ActiveModel, Column, Entity as Answers, Model};
use crate::errors::{EvalSystemError, Result};
use crate::models::evaluation_answers::{
    entities::EvaluationAnswer, requests::CreateEvaluationAnswerRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_answer_impl(
        &self,
        req: CreateEvaluationAnswerRequest,
    ) -> Result<EvaluationAnswer> {
        let model = ActiveModel {
            eval_id: Set(req.eval_id),
            question_id: Set(req.question_id),
            score: Set(req.score),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建评价答案失败: {e}")))?;

        let question = self.get_question_by_id_impl(result.question_id).await?;
        Ok(result.into_answer(question))
    }

    pub async fn list_answers_impl(&self, eval_id: Option<i64>) -> Result<Vec<EvaluationAnswer>> {
        let mut select = Answers::find();
        if let Some(eval_id) = eval_id {
            select = select.filter(Column::EvalId.eq(eval_id));
        }

        let models = select
            .order_by_asc(Column::EvalId)
            .order_by_asc(Column::QuestionId)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价答案失败: {e}")))?;

        self.attach_answers(models).await
    }

    pub async fn delete_answer_impl(&self, id: i64) -> Result<bool> {
        let result = Answers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("删除评价答案失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    async fn attach_answers(&self, models: Vec<Model>) -> Result<Vec<EvaluationAnswer>> {
        let questions = self
            .question_map(models.iter().map(|m| m.question_id))
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let question = questions.get(&m.question_id).cloned();
                m.into_answer(question)
            })
            .collect())
    }

    /// 按评价分组批量加载答案，组内按题目 ID 排序
    pub(super) async fn answers_by_evaluation(
        &self,
        eval_ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, Vec<EvaluationAnswer>>> {
        let ids = unique_ids(eval_ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = Answers::find()
            .filter(Column::EvalId.is_in(ids))
            .order_by_asc(Column::QuestionId)
            .all(&self.db)
            .await
            .map_err(|e| {
                EvalSystemError::database_operation(format!("批量查询评价答案失败: {e}"))
            })?;

        let mut grouped: HashMap<i64, Vec<EvaluationAnswer>> = HashMap::new();
        for answer in self.attach_answers(models).await? {
            grouped.entry(answer.eval_id).or_default().push(answer);
        }
        Ok(grouped)
    }
}
