use std::collections::HashMap;

use super::{SeaOrmStorage, like_ci, unique_ids};
use crate::entity::evaluation_questions::{ActiveModel, Column, Entity as Questions};
use crate::errors::{EvalSystemError, Result};
use crate::models::{
    PageMeta, PaginatedResponse,
    common::pagination::normalize_page,
    evaluation_questions::{
        entities::EvaluationQuestion,
        requests::{
            CreateEvaluationQuestionRequest, EvaluationQuestionListQuery,
            UpdateEvaluationQuestionRequest,
        },
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_question_impl(
        &self,
        req: CreateEvaluationQuestionRequest,
    ) -> Result<EvaluationQuestion> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            question_text: Set(req.question_text),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建评价题目失败: {e}")))?;

        Ok(result.into_question())
    }

    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<EvaluationQuestion>> {
        let result = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价题目失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    pub async fn list_questions_with_pagination_impl(
        &self,
        query: EvaluationQuestionListQuery,
    ) -> Result<PaginatedResponse<EvaluationQuestion>> {
        let (page, limit) = normalize_page(query.page, query.limit);

        let mut select = Questions::find();
        if let Some(pattern) = contains_pattern(query.search.as_deref()) {
            select = select.filter(like_ci("evaluation_questions.question_text", &pattern));
        }

        // 题目顺序即评价表顺序
        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, limit);
        let total = paginator.num_items().await.map_err(|e| {
            EvalSystemError::database_operation(format!("查询评价题目总数失败: {e}"))
        })?;
        let models = paginator.fetch_page(page - 1).await.map_err(|e| {
            EvalSystemError::database_operation(format!("查询评价题目列表失败: {e}"))
        })?;

        Ok(PaginatedResponse {
            items: models.into_iter().map(|m| m.into_question()).collect(),
            meta: PageMeta::new(total, page, limit),
        })
    }

    pub async fn list_all_questions_impl(&self) -> Result<Vec<EvaluationQuestion>> {
        let models = Questions::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价题目失败: {e}")))?;

        Ok(models.into_iter().map(|m| m.into_question()).collect())
    }

    pub async fn update_question_impl(
        &self,
        id: i64,
        update: UpdateEvaluationQuestionRequest,
    ) -> Result<Option<EvaluationQuestion>> {
        if self.get_question_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            question_text: Set(update.question_text),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("更新评价题目失败: {e}")))?;

        self.get_question_by_id_impl(id).await
    }

    pub async fn delete_question_impl(&self, id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("删除评价题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_questions_impl(&self) -> Result<u64> {
        Questions::find()
            .count(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("统计评价题目失败: {e}")))
    }

    pub(super) async fn question_map(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, EvaluationQuestion>> {
        let ids = unique_ids(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = Questions::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                EvalSystemError::database_operation(format!("批量查询评价题目失败: {e}"))
            })?;

        Ok(models.into_iter().map(|m| (m.id, m.into_question())).collect())
    }
}
