//! Favorite repository.

use std::sync::Arc;

use crate::entities::{favorite, Favorite};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tradepost_common::AppResult;

use super::map_db_err;

/// Favorite repository for database operations. Favorites are addressed by
/// their `(user_id, listing_id)` pair rather than the surrogate id.
#[derive(Clone)]
pub struct FavoriteRepository {
    db: Arc<DatabaseConnection>,
}

impl FavoriteRepository {
    /// Create a new favorite repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a favorite by user and listing.
    pub async fn find_by_user_and_listing(
        &self,
        user_id: &str,
        listing_id: &str,
    ) -> AppResult<Option<favorite::Model>> {
        Favorite::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::ListingId.eq(listing_id))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Check if a listing is favorited by a user.
    pub async fn is_favorited(&self, user_id: &str, listing_id: &str) -> AppResult<bool> {
        Ok(self
            .find_by_user_and_listing(user_id, listing_id)
            .await?
            .is_some())
    }

    /// Create a new favorite.
    pub async fn create(&self, model: favorite::ActiveModel) -> AppResult<favorite::Model> {
        model.insert(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Delete a favorite by user and listing. Removing a missing pair is a
    /// no-op.
    pub async fn delete_by_user_and_listing(
        &self,
        user_id: &str,
        listing_id: &str,
    ) -> AppResult<()> {
        Favorite::delete_many()
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::ListingId.eq(listing_id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    /// Get favorites by user (paginated, stable id order).
    pub async fn find_by_user(
        &self,
        user_id: &str,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<favorite::Model>> {
        Favorite::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_asc(favorite::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}
