use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::task;

/// Limit applied when a caller passes 0 to `find_latest_uncompleted`.
pub const DEFAULT_FIND_LIMIT: u64 = 10;
/// Hard ceiling on any list query.
pub const MAX_FIND_LIMIT: u64 = 1000;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("No fields to update")]
    NoFieldsToUpdate,
    #[error("Failed to create record in task")]
    CreateFailed,
    #[error("Failed to update record in task")]
    UpdateFailed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_completed: Option<bool>,
}

impl Task {
    fn from_model(model: task::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            is_completed: model.is_completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Self>, DbErr> {
        let record = task::Entity::find_by_id(id).one(db).await?;
        Ok(record.map(Self::from_model))
    }

    /// Latest uncompleted tasks, newest first. A count of 0 falls back to
    /// `DEFAULT_FIND_LIMIT`; anything above `MAX_FIND_LIMIT` is clamped.
    pub async fn find_latest_uncompleted<C: ConnectionTrait>(
        db: &C,
        count: u64,
    ) -> Result<Vec<Self>, DbErr> {
        let models = task::Entity::find()
            .filter(task::Column::IsCompleted.eq(false))
            .order_by_desc(task::Column::CreatedAt)
            .limit(clamp_limit(count))
            .all(db)
            .await?;

        Ok(models.into_iter().map(Self::from_model).collect())
    }

    /// Inserts the row and reloads it, so callers always see exactly what
    /// the database holds.
    pub async fn create<C: ConnectionTrait>(db: &C, data: &CreateTask) -> Result<Self, TaskError> {
        let now = Utc::now();
        let active = task::ActiveModel {
            title: Set(data.title.clone()),
            description: Set(data.description.clone()),
            is_completed: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active.insert(db).await?;
        Self::find_by_id(db, model.id)
            .await?
            .ok_or(TaskError::CreateFailed)
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i64,
        data: &UpdateTask,
    ) -> Result<Self, TaskError> {
        if data.title.is_none() && data.description.is_none() && data.is_completed.is_none() {
            return Err(TaskError::NoFieldsToUpdate);
        }

        let record = task::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(TaskError::UpdateFailed)?;

        let mut active: task::ActiveModel = record.into();
        if let Some(title) = &data.title {
            active.title = Set(title.clone());
        }
        if let Some(description) = &data.description {
            active.description = Set(description.clone());
        }
        if let Some(is_completed) = data.is_completed {
            active.is_completed = Set(is_completed);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(db).await?;
        Ok(Self::from_model(updated))
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, DbErr> {
        let result = task::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn exists<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, DbErr> {
        let count = task::Entity::find()
            .filter(task::Column::Id.eq(id))
            .count(db)
            .await?;
        Ok(count > 0)
    }
}

fn clamp_limit(count: u64) -> u64 {
    if count == 0 {
        DEFAULT_FIND_LIMIT
    } else {
        count.min(MAX_FIND_LIMIT)
    }
}
