use std::collections::HashMap;

use super::{SeaOrmStorage, like_ci, unique_ids};
use crate::entity::levels::{ActiveModel, Column, Entity as Levels, Model};
use crate::errors::{EvalSystemError, Result};
use crate::models::{
    PageMeta, PaginatedResponse,
    common::pagination::normalize_page,
    levels::{
        entities::Level,
        requests::{CreateLevelRequest, LevelListQuery, UpdateLevelRequest},
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_level_impl(&self, req: CreateLevelRequest) -> Result<Level> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            level_name: Set(req.level_name),
            department_id: Set(req.department_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建年级失败: {e}")))?;

        let department = match result.department_id {
            Some(id) => self.get_department_by_id_impl(id).await?,
            None => None,
        };
        Ok(result.into_level(department))
    }

    pub async fn get_level_by_id_impl(&self, id: i64) -> Result<Option<Level>> {
        let result = Levels::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询年级失败: {e}")))?;

        Ok(self.attach_levels(result.into_iter().collect()).await?.pop())
    }

    pub async fn get_level_by_name_impl(&self, name: &str) -> Result<Option<Level>> {
        let result = Levels::find()
            .filter(Column::LevelName.eq(name.trim()))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询年级失败: {e}")))?;

        Ok(self.attach_levels(result.into_iter().collect()).await?.pop())
    }

    pub async fn list_levels_with_pagination_impl(
        &self,
        query: LevelListQuery,
    ) -> Result<PaginatedResponse<Level>> {
        let (page, limit) = normalize_page(query.page, query.limit);

        let mut select = Levels::find();
        if let Some(department_id) = query.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }
        if let Some(pattern) = contains_pattern(query.search.as_deref()) {
            select = select.filter(like_ci("levels.level_name", &pattern));
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, limit);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询年级总数失败: {e}")))?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询年级列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: self.attach_levels(models).await?,
            meta: PageMeta::new(total, page, limit),
        })
    }

    pub async fn update_level_impl(
        &self,
        id: i64,
        update: UpdateLevelRequest,
    ) -> Result<Option<Level>> {
        if Levels::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询年级失败: {e}")))?
            .is_none()
        {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(level_name) = update.level_name {
            model.level_name = Set(level_name);
        }
        if let Some(department_id) = update.department_id {
            model.department_id = Set(department_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("更新年级失败: {e}")))?;

        self.get_level_by_id_impl(id).await
    }

    pub async fn delete_level_impl(&self, id: i64) -> Result<bool> {
        let result = Levels::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("删除年级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 附加所属部门
    async fn attach_levels(&self, models: Vec<Model>) -> Result<Vec<Level>> {
        let departments = self
            .department_map(models.iter().filter_map(|m| m.department_id))
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let department = m.department_id.and_then(|id| departments.get(&id).cloned());
                m.into_level(department)
            })
            .collect())
    }

    /// 批量加载年级（含部门）
    pub(super) async fn level_map(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, Level>> {
        let ids = unique_ids(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = Levels::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("批量查询年级失败: {e}")))?;

        Ok(self
            .attach_levels(models)
            .await?
            .into_iter()
            .map(|level| (level.id, level))
            .collect())
    }
}
