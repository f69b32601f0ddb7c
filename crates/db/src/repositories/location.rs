//! Location repository.

use std::sync::Arc;

use crate::entities::{location, Location};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect,
};
use tradepost_common::{AppError, AppResult};

use super::map_db_err;

/// Location repository for database operations.
#[derive(Clone)]
pub struct LocationRepository {
    db: Arc<DatabaseConnection>,
}

impl LocationRepository {
    /// Create a new location repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a location by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<location::Model>> {
        Location::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Find a location by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: &str) -> AppResult<location::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("location {id}")))
    }

    /// Get locations (paginated, stable id order).
    pub async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<location::Model>> {
        Location::find()
            .order_by_asc(location::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Create a new location.
    pub async fn create(&self, model: location::ActiveModel) -> AppResult<location::Model> {
        model.insert(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Update a location.
    pub async fn update(&self, model: location::ActiveModel) -> AppResult<location::Model> {
        model.update(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Delete a location by ID. Deleting a missing id is a no-op.
    pub async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        Location::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}
