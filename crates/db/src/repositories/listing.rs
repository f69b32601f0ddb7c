//! Listing repository.

use std::sync::Arc;

use crate::entities::{listing, Listing};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect,
};
use tradepost_common::{AppError, AppResult};

use super::map_db_err;

/// Listing repository for database operations.
#[derive(Clone)]
pub struct ListingRepository {
    db: Arc<DatabaseConnection>,
}

impl ListingRepository {
    /// Create a new listing repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a listing by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<listing::Model>> {
        Listing::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Find a listing by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: &str) -> AppResult<listing::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("listing {id}")))
    }

    /// Get listings (paginated, newest first).
    pub async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<listing::Model>> {
        Listing::find()
            .order_by_desc(listing::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Create a new listing.
    pub async fn create(&self, model: listing::ActiveModel) -> AppResult<listing::Model> {
        model.insert(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Update a listing.
    pub async fn update(&self, model: listing::ActiveModel) -> AppResult<listing::Model> {
        model.update(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Delete a listing by ID. Images and favorites cascade at the store
    /// level. Deleting a missing id is a no-op.
    pub async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        Listing::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Set};

    fn create_test_listing(id: &str, title: &str) -> listing::Model {
        listing::Model {
            id: id.to_string(),
            title: title.to_string(),
            description: "A test listing".to_string(),
            price: 99.5,
            currency: "USD".to_string(),
            category_id: "cat1".to_string(),
            location_id: "loc1".to_string(),
            user_id: "user1".to_string(),
            status: "active".to_string(),
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let listing = create_test_listing("lst1", "Bike");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[listing.clone()]])
                .into_connection(),
        );

        let repo = ListingRepository::new(db);
        let result = repo.find_by_id("lst1").await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().title, "Bike");
    }

    #[tokio::test]
    async fn test_get_by_id_not_found_returns_error() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<listing::Model>::new()])
                .into_connection(),
        );

        let repo = ListingRepository::new(db);
        let result = repo.get_by_id("nonexistent").await;

        match result {
            Err(AppError::NotFound(msg)) => assert!(msg.contains("listing")),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list() {
        let l1 = create_test_listing("lst1", "Bike");
        let l2 = create_test_listing("lst2", "Sofa");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[l1, l2]])
                .into_connection(),
        );

        let repo = ListingRepository::new(db);
        let result = repo.list(20, 0).await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_create_listing() {
        let listing = create_test_listing("lst1", "Bike");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[listing.clone()]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let repo = ListingRepository::new(db);

        let active = listing::ActiveModel {
            id: Set("lst1".to_string()),
            title: Set("Bike".to_string()),
            description: Set("A test listing".to_string()),
            price: Set(99.5),
            currency: Set("USD".to_string()),
            category_id: Set("cat1".to_string()),
            location_id: Set("loc1".to_string()),
            user_id: Set("user1".to_string()),
            status: Set("active".to_string()),
            ..Default::default()
        };

        let result = repo.create(active).await.unwrap();
        assert_eq!(result.currency, "USD");
    }
}
