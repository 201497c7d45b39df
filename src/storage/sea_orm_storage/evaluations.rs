use super::{SeaOrmStorage, like_ci};
use crate::entity::evaluation_answers::{
    ActiveModel as AnswerActiveModel, Entity as EvaluationAnswers,
};
use crate::entity::evaluations::{ActiveModel, Column, Entity as Evaluations, Model, Relation};
use crate::entity::course_assignments;
use crate::errors::{EvalSystemError, Result};
use crate::models::{
    PageMeta, PaginatedResponse,
    common::pagination::normalize_page,
    evaluations::{
        entities::{Evaluation, EvaluationDetail},
        requests::{CreateEvaluationRequest, EvaluationListQuery, SubmitEvaluationRequest},
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbBackend, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
    TransactionTrait,
};

/// 学生全名 `名 姓`，MySQL 的 `||` 是逻辑或
fn student_full_name(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::MySql => "CONCAT(students.first_name, ' ', students.last_name)",
        _ => "(students.first_name || ' ' || students.last_name)",
    }
}

/// 按筛选条件构造查询，按评价时间倒序
fn filtered_select(query: &EvaluationListQuery, backend: DbBackend) -> Select<Evaluations> {
    let mut select = Evaluations::find();

    if let Some(student_id) = query.student_id {
        select = select.filter(Column::StudentId.eq(student_id));
    }
    if let Some(assignment_id) = query.assignment_id {
        select = select.filter(Column::AssignmentId.eq(assignment_id));
    }

    let pattern = contains_pattern(query.search.as_deref());
    if query.classroom_id.is_some() || query.teacher_id.is_some() || pattern.is_some() {
        select = select.join(JoinType::InnerJoin, Relation::CourseAssignment.def());
    }
    if let Some(classroom_id) = query.classroom_id {
        select = select.filter(course_assignments::Column::ClassroomId.eq(classroom_id));
    }
    if let Some(teacher_id) = query.teacher_id {
        select = select.filter(course_assignments::Column::TeacherId.eq(teacher_id));
    }
    if let Some(pattern) = pattern {
        // 学生姓名、科目名、教师名
        select = select
            .join(JoinType::InnerJoin, Relation::Student.def())
            .join(
                JoinType::InnerJoin,
                course_assignments::Relation::Subject.def(),
            )
            .join(
                JoinType::InnerJoin,
                course_assignments::Relation::Teacher.def(),
            )
            .filter(
                Condition::any()
                    .add(like_ci("students.first_name", &pattern))
                    .add(like_ci("students.last_name", &pattern))
                    .add(like_ci(student_full_name(backend), &pattern))
                    .add(like_ci("subjects.subject_name", &pattern))
                    .add(like_ci("teachers.first_name", &pattern)),
            );
    }

    select
        .order_by_desc(Column::EvalDate)
        .order_by_desc(Column::Id)
}

impl SeaOrmStorage {
    /// 管理员直接创建评价，日期取当前时间
    pub async fn create_evaluation_impl(&self, req: CreateEvaluationRequest) -> Result<Evaluation> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            assignment_id: Set(req.assignment_id),
            eval_date: Set(chrono::Utc::now().timestamp()),
            suggestion: Set(req.suggestion),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建评价失败: {e}")))?;

        Ok(result.into_evaluation())
    }

    pub async fn get_evaluation_by_id_impl(&self, id: i64) -> Result<Option<Evaluation>> {
        let result = Evaluations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价失败: {e}")))?;

        Ok(result.map(|m| m.into_evaluation()))
    }

    pub async fn get_evaluation_detail_impl(&self, id: i64) -> Result<Option<EvaluationDetail>> {
        let result = Evaluations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价失败: {e}")))?;

        Ok(self.attach_details(result.into_iter().collect()).await?.pop())
    }

    pub async fn list_evaluations_with_pagination_impl(
        &self,
        query: EvaluationListQuery,
    ) -> Result<PaginatedResponse<EvaluationDetail>> {
        let (page, limit) = normalize_page(query.page, query.limit);

        let select = filtered_select(&query, self.db.get_database_backend());
        let paginator = select.paginate(&self.db, limit);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价总数失败: {e}")))?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: self.attach_details(models).await?,
            meta: PageMeta::new(total, page, limit),
        })
    }

    pub async fn list_evaluation_details_impl(
        &self,
        query: EvaluationListQuery,
    ) -> Result<Vec<EvaluationDetail>> {
        let models = filtered_select(&query, self.db.get_database_backend())
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价失败: {e}")))?;

        self.attach_details(models).await
    }

    pub async fn list_recent_evaluations_impl(&self, limit: u64) -> Result<Vec<EvaluationDetail>> {
        let models = Evaluations::find()
            .order_by_desc(Column::EvalDate)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询最近评价失败: {e}")))?;

        self.attach_details(models).await
    }

    pub async fn list_evaluated_assignment_ids_impl(&self, student_id: i64) -> Result<Vec<i64>> {
        Evaluations::find()
            .select_only()
            .column(Column::AssignmentId)
            .filter(Column::StudentId.eq(student_id))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询已评价课程失败: {e}")))
    }

    /// 写入评价与全部答案，任一步失败整体回滚
    pub async fn submit_evaluation_impl(
        &self,
        student_id: i64,
        req: SubmitEvaluationRequest,
    ) -> Result<Evaluation> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let evaluation = ActiveModel {
            student_id: Set(student_id),
            assignment_id: Set(req.assignment_id),
            eval_date: Set(chrono::Utc::now().timestamp()),
            suggestion: Set(req
                .suggestion
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| EvalSystemError::database_operation(format!("创建评价失败: {e}")))?;

        let answers: Vec<AnswerActiveModel> = req
            .answers
            .iter()
            .map(|a| AnswerActiveModel {
                eval_id: Set(evaluation.id),
                question_id: Set(a.question_id),
                score: Set(a.score),
                ..Default::default()
            })
            .collect();
        if !answers.is_empty() {
            EvaluationAnswers::insert_many(answers)
                .exec(&txn)
                .await
                .map_err(|e| EvalSystemError::database_operation(format!("写入评价答案失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(evaluation.into_evaluation())
    }

    pub async fn delete_evaluation_impl(&self, id: i64) -> Result<bool> {
        let result = Evaluations::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("删除评价失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量附加学生、授课安排与答案，并计算平均分
    async fn attach_details(&self, models: Vec<Model>) -> Result<Vec<EvaluationDetail>> {
        let students = self.student_map(models.iter().map(|m| m.student_id)).await?;
        let assignments = self
            .assignment_map(models.iter().map(|m| m.assignment_id))
            .await?;
        let mut answers = self.answers_by_evaluation(models.iter().map(|m| m.id)).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let student = students.get(&m.student_id).cloned();
                let assignment = assignments.get(&m.assignment_id).cloned();
                let answers = answers.remove(&m.id).unwrap_or_default();
                EvaluationDetail::new(m.into_evaluation(), student, assignment, answers)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::evaluations::requests::SubmitAnswer;
    use crate::storage::sea_orm_storage::testing::{memory_storage, seed};

    fn submission(assignment_id: i64, answers: &[(i64, i32)]) -> SubmitEvaluationRequest {
        SubmitEvaluationRequest {
            assignment_id,
            suggestion: Some("  more examples please ".to_string()),
            answers: answers
                .iter()
                .map(|&(question_id, score)| SubmitAnswer { question_id, score })
                .collect(),
        }
    }

    fn search(term: &str) -> EvaluationListQuery {
        EvaluationListQuery {
            search: Some(term.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_name_expression_per_backend() {
        assert!(student_full_name(DbBackend::MySql).starts_with("CONCAT("));
        assert!(student_full_name(DbBackend::Sqlite).contains("||"));
        assert!(student_full_name(DbBackend::Postgres).contains("||"));
    }

    #[actix_web::test]
    async fn test_submit_writes_evaluation_and_answers() {
        let storage = memory_storage().await;
        let fx = seed(&storage).await;
        let q = &fx.question_ids;

        let req = submission(fx.own[0].id, &[(q[0], 5), (q[1], 4)]);
        let evaluation = storage
            .submit_evaluation_impl(fx.student.id, req)
            .await
            .unwrap();
        assert_eq!(evaluation.suggestion.as_deref(), Some("more examples please"));

        let detail = storage
            .get_evaluation_detail_impl(evaluation.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.answers.len(), 2);
        assert_eq!(detail.average, 4.5);
        assert_eq!(
            storage
                .list_evaluated_assignment_ids_impl(fx.student.id)
                .await
                .unwrap(),
            vec![fx.own[0].id]
        );
    }

    #[actix_web::test]
    async fn test_second_submission_hits_unique_index() {
        let storage = memory_storage().await;
        let fx = seed(&storage).await;
        let q = &fx.question_ids;
        let answers = [(q[0], 3), (q[1], 3)];

        storage
            .submit_evaluation_impl(fx.student.id, submission(fx.own[0].id, &answers))
            .await
            .unwrap();
        let err = storage
            .submit_evaluation_impl(fx.student.id, submission(fx.own[0].id, &answers))
            .await
            .unwrap_err();
        assert!(err.is_unique_violation(), "{err}");

        let all = storage
            .list_evaluation_details_impl(EvaluationListQuery::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[actix_web::test]
    async fn test_failed_answer_insert_rolls_back_evaluation() {
        let storage = memory_storage().await;
        let fx = seed(&storage).await;
        let q = &fx.question_ids;

        // 同一题出现两次，违反答案唯一索引
        let req = submission(fx.own[0].id, &[(q[0], 5), (q[0], 1)]);
        let result = storage.submit_evaluation_impl(fx.student.id, req).await;
        assert!(result.is_err());

        assert!(
            storage
                .list_evaluated_assignment_ids_impl(fx.student.id)
                .await
                .unwrap()
                .is_empty()
        );
        assert!(storage.list_answers_impl(None).await.unwrap().is_empty());

        // 回滚后可以正常重新提交
        let req = submission(fx.own[0].id, &[(q[0], 5), (q[1], 1)]);
        storage
            .submit_evaluation_impl(fx.student.id, req)
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_search_matches_full_student_name() {
        let storage = memory_storage().await;
        let fx = seed(&storage).await;
        let q = &fx.question_ids;
        let req = submission(fx.own[0].id, &[(q[0], 4), (q[1], 4)]);
        storage
            .submit_evaluation_impl(fx.student.id, req)
            .await
            .unwrap();

        for term in ["john", "SMITH", "john smith", "John Smith", "mathematics", "somsak"] {
            let hits = storage.list_evaluation_details_impl(search(term)).await.unwrap();
            assert_eq!(hits.len(), 1, "search {term:?}");
        }
        for term in ["smith john", "science", "50%"] {
            let hits = storage.list_evaluation_details_impl(search(term)).await.unwrap();
            assert!(hits.is_empty(), "search {term:?}");
        }

        let page = storage
            .list_evaluations_with_pagination_impl(search("john smith"))
            .await
            .unwrap();
        assert_eq!(page.meta.total, 1);
    }
}
