//! Favorite service.

use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;
use tradepost_common::{AppError, AppResult, IdGenerator};
use tradepost_db::entities::favorite;
use tradepost_db::repositories::{FavoriteRepository, ListingRepository, UserRepository};
use validator::Validate;

/// Favorites are addressed by their `(user_id, listing_id)` pair.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteInput {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub listing_id: String,
}

/// Service for managing favorites.
#[derive(Clone)]
pub struct FavoriteService {
    favorite_repo: FavoriteRepository,
    user_repo: UserRepository,
    listing_repo: ListingRepository,
    id_gen: IdGenerator,
}

impl FavoriteService {
    /// Create a new favorite service.
    #[must_use]
    pub const fn new(
        favorite_repo: FavoriteRepository,
        user_repo: UserRepository,
        listing_repo: ListingRepository,
    ) -> Self {
        Self {
            favorite_repo,
            user_repo,
            listing_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Add a listing to a user's favorites.
    pub async fn add(&self, input: FavoriteInput) -> AppResult<favorite::Model> {
        input.validate()?;

        if self.user_repo.find_by_id(&input.user_id).await?.is_none() {
            return Err(AppError::Constraint(format!(
                "user {} does not exist",
                input.user_id
            )));
        }
        if self
            .listing_repo
            .find_by_id(&input.listing_id)
            .await?
            .is_none()
        {
            return Err(AppError::Constraint(format!(
                "listing {} does not exist",
                input.listing_id
            )));
        }

        // The unique index backs this check up against races.
        if self
            .favorite_repo
            .is_favorited(&input.user_id, &input.listing_id)
            .await?
        {
            return Err(AppError::Constraint(format!(
                "listing {} is already favorited by user {}",
                input.listing_id, input.user_id
            )));
        }

        let id = self.id_gen.generate();
        let model = favorite::ActiveModel {
            id: Set(id),
            user_id: Set(input.user_id),
            listing_id: Set(input.listing_id),
            created_at: Set(Utc::now().into()),
        };

        self.favorite_repo.create(model).await
    }

    /// Remove a listing from a user's favorites. Removing a pair that is
    /// not favorited is a no-op.
    pub async fn remove(&self, input: FavoriteInput) -> AppResult<()> {
        input.validate()?;

        self.favorite_repo
            .delete_by_user_and_listing(&input.user_id, &input.listing_id)
            .await
    }

    /// List a user's favorites (paginated).
    pub async fn list_for_user(
        &self,
        user_id: &str,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<favorite::Model>> {
        self.favorite_repo.find_by_user(user_id, limit, offset).await
    }
}
