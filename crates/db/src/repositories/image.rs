//! Listing image repository.

use std::sync::Arc;

use crate::entities::{image, Image};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tradepost_common::AppResult;

use super::map_db_err;

/// Image repository for database operations. Images are only created and
/// read through their listing; deletion happens via the listing cascade.
#[derive(Clone)]
pub struct ImageRepository {
    db: Arc<DatabaseConnection>,
}

impl ImageRepository {
    /// Create a new image repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Create a new image.
    pub async fn create(&self, model: image::ActiveModel) -> AppResult<image::Model> {
        model.insert(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Get all images for a listing, in gallery order.
    pub async fn find_by_listing(&self, listing_id: &str) -> AppResult<Vec<image::Model>> {
        Image::find()
            .filter(image::Column::ListingId.eq(listing_id))
            .order_by_asc(image::Column::Order)
            .order_by_asc(image::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}
