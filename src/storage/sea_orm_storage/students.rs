use std::collections::HashMap;

use super::{SeaOrmStorage, like_ci, unique_ids};
use crate::entity::students::{ActiveModel, Column, Entity as Students, Model};
use crate::errors::{EvalSystemError, Result};
use crate::models::{
    PageMeta, PaginatedResponse,
    common::pagination::normalize_page,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_code: Set(req.student_code),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            classroom_id: Set(req.classroom_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建学生失败: {e}")))?;

        let classroom = match result.classroom_id {
            Some(id) => self.get_classroom_by_id_impl(id).await?,
            None => None,
        };
        Ok(result.into_student(classroom))
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(self.attach_students(result.into_iter().collect()).await?.pop())
    }

    /// 按学号精确查找
    pub async fn get_student_by_code_impl(&self, code: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::StudentCode.eq(code.trim()))
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(self.attach_students(result.into_iter().collect()).await?.pop())
    }

    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<PaginatedResponse<Student>> {
        let (page, limit) = normalize_page(query.page, query.limit);

        let mut select = Students::find();
        if let Some(classroom_id) = query.classroom_id {
            select = select.filter(Column::ClassroomId.eq(classroom_id));
        }
        if let Some(pattern) = contains_pattern(query.search.as_deref()) {
            select = select.filter(
                Condition::any()
                    .add(like_ci("students.student_code", &pattern))
                    .add(like_ci("students.first_name", &pattern))
                    .add(like_ci("students.last_name", &pattern)),
            );
        }

        let paginator = select
            .order_by_asc(Column::StudentCode)
            .paginate(&self.db, limit);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询学生总数失败: {e}")))?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: self.attach_students(models).await?,
            meta: PageMeta::new(total, page, limit),
        })
    }

    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        if Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询学生失败: {e}")))?
            .is_none()
        {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(student_code) = update.student_code {
            model.student_code = Set(student_code);
        }
        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }
        if let Some(classroom_id) = update.classroom_id {
            model.classroom_id = Set(classroom_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 附加所在教室
    async fn attach_students(&self, models: Vec<Model>) -> Result<Vec<Student>> {
        let classrooms = self
            .classroom_map(models.iter().filter_map(|m| m.classroom_id))
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let classroom = m.classroom_id.and_then(|id| classrooms.get(&id).cloned());
                m.into_student(classroom)
            })
            .collect())
    }

    /// 批量加载学生（含教室）
    pub(super) async fn student_map(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, Student>> {
        let ids = unique_ids(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = Students::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("批量查询学生失败: {e}")))?;

        Ok(self
            .attach_students(models)
            .await?
            .into_iter()
            .map(|student| (student.id, student))
            .collect())
    }
}
