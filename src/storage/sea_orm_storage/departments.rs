use std::collections::HashMap;

use super::{SeaOrmStorage, like_ci, unique_ids};
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::errors::{EvalSystemError, Result};
use crate::models::{
    PageMeta, PaginatedResponse,
    common::pagination::normalize_page,
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest},
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_department_impl(&self, req: CreateDepartmentRequest) -> Result<Department> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            dept_name: Set(req.dept_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建部门失败: {e}")))?;

        Ok(result.into_department())
    }

    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询部门失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    pub async fn get_department_by_name_impl(&self, name: &str) -> Result<Option<Department>> {
        let result = Departments::find()
            .filter(Column::DeptName.eq(name.trim()))
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询部门失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 分页列出部门
    pub async fn list_departments_with_pagination_impl(
        &self,
        query: DepartmentListQuery,
    ) -> Result<PaginatedResponse<Department>> {
        let (page, limit) = normalize_page(query.page, query.limit);

        let mut select = Departments::find();
        if let Some(pattern) = contains_pattern(query.search.as_deref()) {
            select = select.filter(like_ci("departments.dept_name", &pattern));
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, limit);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询部门总数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询部门列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_department()).collect(),
            meta: PageMeta::new(total, page, limit),
        })
    }

    pub async fn update_department_impl(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        if self.get_department_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(dept_name) = update.dept_name {
            model.dept_name = Set(dept_name);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("更新部门失败: {e}")))?;

        self.get_department_by_id_impl(id).await
    }

    pub async fn delete_department_impl(&self, id: i64) -> Result<bool> {
        let result = Departments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("删除部门失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量加载部门
    pub(super) async fn department_map(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, Department>> {
        let ids = unique_ids(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = Departments::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("批量查询部门失败: {e}")))?;

        Ok(models
            .into_iter()
            .map(|m| (m.id, m.into_department()))
            .collect())
    }
}
