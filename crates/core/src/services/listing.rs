//! Listing service.

use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;
use tradepost_common::{AppError, AppResult, IdGenerator};
use tradepost_db::entities::{image, listing};
use tradepost_db::repositories::{
    CategoryRepository, ImageRepository, ListingRepository, LocationRepository, UserRepository,
};
use validator::Validate;

/// Input for creating a listing.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingInput {
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 3, max = 8))]
    pub currency: Option<String>,
    #[validate(length(min = 1))]
    pub category_id: String,
    #[validate(length(min = 1))]
    pub location_id: String,
    #[validate(length(min = 1))]
    pub user_id: String,
    pub status: Option<String>,
}

/// Input for updating a listing. The category, location, and owner links
/// are fixed at creation and cannot be changed here.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingInput {
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(length(min = 3, max = 8))]
    pub currency: Option<String>,
    pub status: Option<String>,
}

/// Input for attaching an image to a listing.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddImageInput {
    #[validate(length(min = 1, max = 1024))]
    pub url: String,
    #[validate(range(min = 0))]
    pub order: Option<i32>,
}

/// Service for managing listings and their images.
#[derive(Clone)]
pub struct ListingService {
    listing_repo: ListingRepository,
    image_repo: ImageRepository,
    category_repo: CategoryRepository,
    location_repo: LocationRepository,
    user_repo: UserRepository,
    id_gen: IdGenerator,
}

impl ListingService {
    /// Create a new listing service.
    #[must_use]
    pub const fn new(
        listing_repo: ListingRepository,
        image_repo: ImageRepository,
        category_repo: CategoryRepository,
        location_repo: LocationRepository,
        user_repo: UserRepository,
    ) -> Self {
        Self {
            listing_repo,
            image_repo,
            category_repo,
            location_repo,
            user_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Get a listing by ID.
    pub async fn get(&self, id: &str) -> AppResult<listing::Model> {
        self.listing_repo.get_by_id(id).await
    }

    /// Get a listing together with its images.
    ///
    /// Two sequential reads, not a transaction: an image attached between
    /// them can be missed. Accepted for this read endpoint.
    pub async fn get_with_images(
        &self,
        id: &str,
    ) -> AppResult<(listing::Model, Vec<image::Model>)> {
        let listing = self.listing_repo.get_by_id(id).await?;
        let images = self.image_repo.find_by_listing(id).await?;
        Ok((listing, images))
    }

    /// List listings (paginated, newest first).
    pub async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<listing::Model>> {
        self.listing_repo.list(limit, offset).await
    }

    /// Create a new listing.
    pub async fn create(&self, input: CreateListingInput) -> AppResult<listing::Model> {
        input.validate()?;

        let status = input.status.unwrap_or_else(|| listing::DEFAULT_STATUS.to_string());
        validate_status(&status)?;

        if self
            .category_repo
            .find_by_id(&input.category_id)
            .await?
            .is_none()
        {
            return Err(AppError::Constraint(format!(
                "category {} does not exist",
                input.category_id
            )));
        }
        if self
            .location_repo
            .find_by_id(&input.location_id)
            .await?
            .is_none()
        {
            return Err(AppError::Constraint(format!(
                "location {} does not exist",
                input.location_id
            )));
        }
        if self.user_repo.find_by_id(&input.user_id).await?.is_none() {
            return Err(AppError::Constraint(format!(
                "user {} does not exist",
                input.user_id
            )));
        }

        let id = self.id_gen.generate();
        let now = Utc::now();

        let model = listing::ActiveModel {
            id: Set(id),
            title: Set(input.title),
            description: Set(input.description),
            price: Set(input.price),
            currency: Set(input
                .currency
                .unwrap_or_else(|| listing::DEFAULT_CURRENCY.to_string())),
            category_id: Set(input.category_id),
            location_id: Set(input.location_id),
            user_id: Set(input.user_id),
            status: Set(status),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        self.listing_repo.create(model).await
    }

    /// Update a listing with a partial payload.
    pub async fn update(&self, id: &str, input: UpdateListingInput) -> AppResult<listing::Model> {
        input.validate()?;

        if let Some(ref status) = input.status {
            validate_status(status)?;
        }

        let current = self.listing_repo.get_by_id(id).await?;

        let mut active: listing::ActiveModel = current.into();

        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(price) = input.price {
            active.price = Set(price);
        }
        if let Some(currency) = input.currency {
            active.currency = Set(currency);
        }
        if let Some(status) = input.status {
            active.status = Set(status);
        }

        active.updated_at = Set(Utc::now().into());

        self.listing_repo.update(active).await
    }

    /// Delete a listing. Images and favorites cascade at the store level.
    /// Deleting a missing id is a no-op.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.listing_repo.delete_by_id(id).await
    }

    /// Attach an image to a listing.
    pub async fn add_image(&self, listing_id: &str, input: AddImageInput) -> AppResult<image::Model> {
        input.validate()?;

        // The path names the listing; a missing one is NotFound rather
        // than a constraint failure.
        self.listing_repo.get_by_id(listing_id).await?;

        let id = self.id_gen.generate();

        let model = image::ActiveModel {
            id: Set(id),
            listing_id: Set(listing_id.to_string()),
            url: Set(input.url),
            order: Set(input.order.unwrap_or(image::DEFAULT_ORDER)),
            created_at: Set(Utc::now().into()),
        };

        self.image_repo.create(model).await
    }
}

fn validate_status(status: &str) -> AppResult<()> {
    if listing::STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "unknown listing status: {status}"
        )))
    }
}
