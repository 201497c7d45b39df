use std::collections::HashMap;

use super::{SeaOrmStorage, like_ci, unique_ids};
use crate::entity::course_assignments::{
    ActiveModel, Column, Entity as CourseAssignments, Model, Relation,
};
use crate::errors::{EvalSystemError, Result};
use crate::models::{
    PageMeta, PaginatedResponse,
    common::pagination::normalize_page,
    course_assignments::{
        entities::CourseAssignment,
        requests::{
            CourseAssignmentListQuery, CreateCourseAssignmentRequest,
            UpdateCourseAssignmentRequest,
        },
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    pub async fn create_course_assignment_impl(
        &self,
        req: CreateCourseAssignmentRequest,
    ) -> Result<CourseAssignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(req.teacher_id),
            subject_id: Set(req.subject_id),
            classroom_id: Set(req.classroom_id),
            term: Set(req.term),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建授课安排失败: {e}")))?;

        let mut items = self.attach_assignments(vec![result]).await?;
        items
            .pop()
            .ok_or_else(|| EvalSystemError::database_operation("创建授课安排后读取失败"))
    }

    pub async fn get_course_assignment_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<CourseAssignment>> {
        let result = CourseAssignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询授课安排失败: {e}")))?;

        Ok(self.attach_assignments(result.into_iter().collect()).await?.pop())
    }

    pub async fn find_course_assignment_impl(
        &self,
        teacher_id: i64,
        subject_id: i64,
        classroom_id: i64,
        term: &str,
    ) -> Result<Option<CourseAssignment>> {
        let result = CourseAssignments::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::SubjectId.eq(subject_id))
            .filter(Column::ClassroomId.eq(classroom_id))
            .filter(Column::Term.eq(term))
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询授课安排失败: {e}")))?;

        Ok(self.attach_assignments(result.into_iter().collect()).await?.pop())
    }

    /// 分页列出授课安排
    ///
    /// 关键字匹配科目代码、科目名与教师姓名。
    pub async fn list_course_assignments_with_pagination_impl(
        &self,
        query: CourseAssignmentListQuery,
    ) -> Result<PaginatedResponse<CourseAssignment>> {
        let (page, limit) = normalize_page(query.page, query.limit);

        let mut select = CourseAssignments::find();
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }
        if let Some(classroom_id) = query.classroom_id {
            select = select.filter(Column::ClassroomId.eq(classroom_id));
        }
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }
        if let Some(term) = query.term.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            select = select.filter(Column::Term.eq(term));
        }
        if let Some(pattern) = contains_pattern(query.search.as_deref()) {
            select = select
                .join(JoinType::InnerJoin, Relation::Subject.def())
                .join(JoinType::InnerJoin, Relation::Teacher.def())
                .filter(
                    Condition::any()
                        .add(like_ci("subjects.subject_code", &pattern))
                        .add(like_ci("subjects.subject_name", &pattern))
                        .add(like_ci("teachers.first_name", &pattern))
                        .add(like_ci("teachers.last_name", &pattern)),
                );
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, limit);
        let total = paginator.num_items().await.map_err(|e| {
            EvalSystemError::database_operation(format!("查询授课安排总数失败: {e}"))
        })?;
        let models = paginator.fetch_page(page - 1).await.map_err(|e| {
            EvalSystemError::database_operation(format!("查询授课安排列表失败: {e}"))
        })?;

        Ok(PaginatedResponse {
            items: self.attach_assignments(models).await?,
            meta: PageMeta::new(total, page, limit),
        })
    }

    pub async fn list_course_assignments_by_classroom_impl(
        &self,
        classroom_id: i64,
    ) -> Result<Vec<CourseAssignment>> {
        let models = CourseAssignments::find()
            .filter(Column::ClassroomId.eq(classroom_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                EvalSystemError::database_operation(format!("查询教室授课安排失败: {e}"))
            })?;

        self.attach_assignments(models).await
    }

    pub async fn update_course_assignment_impl(
        &self,
        id: i64,
        update: UpdateCourseAssignmentRequest,
    ) -> Result<Option<CourseAssignment>> {
        if CourseAssignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询授课安排失败: {e}")))?
            .is_none()
        {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }
        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }
        if let Some(classroom_id) = update.classroom_id {
            model.classroom_id = Set(classroom_id);
        }
        if let Some(term) = update.term {
            model.term = Set(term);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("更新授课安排失败: {e}")))?;

        self.get_course_assignment_by_id_impl(id).await
    }

    pub async fn delete_course_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = CourseAssignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("删除授课安排失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 附加教师、科目与教室
    async fn attach_assignments(&self, models: Vec<Model>) -> Result<Vec<CourseAssignment>> {
        let teachers = self.teacher_map(models.iter().map(|m| m.teacher_id)).await?;
        let subjects = self.subject_map(models.iter().map(|m| m.subject_id)).await?;
        let classrooms = self
            .classroom_map(models.iter().map(|m| m.classroom_id))
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let teacher = teachers.get(&m.teacher_id).cloned();
                let subject = subjects.get(&m.subject_id).cloned();
                let classroom = classrooms.get(&m.classroom_id).cloned();
                m.into_course_assignment(teacher, subject, classroom)
            })
            .collect())
    }

    pub(super) async fn assignment_map(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, CourseAssignment>> {
        let ids = unique_ids(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = CourseAssignments::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                EvalSystemError::database_operation(format!("批量查询授课安排失败: {e}"))
            })?;

        Ok(self
            .attach_assignments(models)
            .await?
            .into_iter()
            .map(|assignment| (assignment.id, assignment))
            .collect())
    }
}
