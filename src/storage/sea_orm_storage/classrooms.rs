use std::collections::HashMap;

use super::{SeaOrmStorage, like_ci, unique_ids};
use crate::entity::classrooms::{ActiveModel, Column, Entity as Classrooms, Model};
use crate::errors::{EvalSystemError, Result};
use crate::models::{
    PageMeta, PaginatedResponse,
    classrooms::{
        entities::Classroom,
        requests::{ClassroomListQuery, CreateClassroomRequest, UpdateClassroomRequest},
    },
    common::pagination::normalize_page,
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_classroom_impl(&self, req: CreateClassroomRequest) -> Result<Classroom> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            room_name: Set(req.room_name),
            level_id: Set(req.level_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建教室失败: {e}")))?;

        let level = match result.level_id {
            Some(id) => self.get_level_by_id_impl(id).await?,
            None => None,
        };
        Ok(result.into_classroom(level))
    }

    pub async fn get_classroom_by_id_impl(&self, id: i64) -> Result<Option<Classroom>> {
        let result = Classrooms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询教室失败: {e}")))?;

        Ok(self.attach_classrooms(result.into_iter().collect()).await?.pop())
    }

    pub async fn get_classroom_by_name_impl(&self, name: &str) -> Result<Option<Classroom>> {
        let result = Classrooms::find()
            .filter(Column::RoomName.eq(name.trim()))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询教室失败: {e}")))?;

        Ok(self.attach_classrooms(result.into_iter().collect()).await?.pop())
    }

    pub async fn list_classrooms_with_pagination_impl(
        &self,
        query: ClassroomListQuery,
    ) -> Result<PaginatedResponse<Classroom>> {
        let (page, limit) = normalize_page(query.page, query.limit);

        let mut select = Classrooms::find();
        if let Some(level_id) = query.level_id {
            select = select.filter(Column::LevelId.eq(level_id));
        }
        if let Some(pattern) = contains_pattern(query.search.as_deref()) {
            select = select.filter(like_ci("classrooms.room_name", &pattern));
        }

        let paginator = select
            .order_by_asc(Column::RoomName)
            .order_by_asc(Column::Id)
            .paginate(&self.db, limit);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询教室总数失败: {e}")))?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询教室列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: self.attach_classrooms(models).await?,
            meta: PageMeta::new(total, page, limit),
        })
    }

    pub async fn update_classroom_impl(
        &self,
        id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>> {
        if Classrooms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询教室失败: {e}")))?
            .is_none()
        {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(room_name) = update.room_name {
            model.room_name = Set(room_name);
        }
        if let Some(level_id) = update.level_id {
            model.level_id = Set(level_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("更新教室失败: {e}")))?;

        self.get_classroom_by_id_impl(id).await
    }

    pub async fn delete_classroom_impl(&self, id: i64) -> Result<bool> {
        let result = Classrooms::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("删除教室失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 附加年级与部门
    async fn attach_classrooms(&self, models: Vec<Model>) -> Result<Vec<Classroom>> {
        let levels = self
            .level_map(models.iter().filter_map(|m| m.level_id))
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let level = m.level_id.and_then(|id| levels.get(&id).cloned());
                m.into_classroom(level)
            })
            .collect())
    }

    /// 批量加载教室（含年级、部门）
    pub(super) async fn classroom_map(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, Classroom>> {
        let ids = unique_ids(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = Classrooms::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("批量查询教室失败: {e}")))?;

        Ok(self
            .attach_classrooms(models)
            .await?
            .into_iter()
            .map(|classroom| (classroom.id, classroom))
            .collect())
    }
}
