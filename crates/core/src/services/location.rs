//! Location service.

use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;
use tradepost_common::{AppResult, IdGenerator};
use tradepost_db::entities::location;
use tradepost_db::repositories::LocationRepository;
use validator::Validate;

/// Input for creating a location.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationInput {
    #[validate(length(min = 1, max = 128))]
    pub country: String,
    #[validate(length(min = 1, max = 128))]
    pub city: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
}

/// Input for updating a location. Coordinates stay mutable; explicit
/// nulls clear them.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationInput {
    #[validate(length(min = 1, max = 128))]
    pub country: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub city: Option<String>,
    pub lat: Option<Option<f64>>,
    pub lng: Option<Option<f64>>,
}

impl UpdateLocationInput {
    /// Coordinate ranges for the double-wrapped fields, which `validator`
    /// cannot reach through `Option<Option<f64>>`.
    fn validate_coordinates(&self) -> Result<(), String> {
        if let Some(Some(lat)) = self.lat {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(format!("latitude {lat} out of range"));
            }
        }
        if let Some(Some(lng)) = self.lng {
            if !(-180.0..=180.0).contains(&lng) {
                return Err(format!("longitude {lng} out of range"));
            }
        }
        Ok(())
    }
}

/// Service for managing locations.
#[derive(Clone)]
pub struct LocationService {
    location_repo: LocationRepository,
    id_gen: IdGenerator,
}

impl LocationService {
    /// Create a new location service.
    #[must_use]
    pub const fn new(location_repo: LocationRepository) -> Self {
        Self {
            location_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Get a location by ID.
    pub async fn get(&self, id: &str) -> AppResult<location::Model> {
        self.location_repo.get_by_id(id).await
    }

    /// List locations (paginated).
    pub async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<location::Model>> {
        self.location_repo.list(limit, offset).await
    }

    /// Create a new location.
    pub async fn create(&self, input: CreateLocationInput) -> AppResult<location::Model> {
        input.validate()?;

        let id = self.id_gen.generate();

        let model = location::ActiveModel {
            id: Set(id),
            country: Set(input.country),
            city: Set(input.city),
            lat: Set(input.lat),
            lng: Set(input.lng),
            created_at: Set(Utc::now().into()),
        };

        self.location_repo.create(model).await
    }

    /// Update a location with a partial payload.
    pub async fn update(&self, id: &str, input: UpdateLocationInput) -> AppResult<location::Model> {
        input.validate()?;
        input
            .validate_coordinates()
            .map_err(tradepost_common::AppError::Validation)?;

        let current = self.location_repo.get_by_id(id).await?;

        let mut active: location::ActiveModel = current.into();

        if let Some(country) = input.country {
            active.country = Set(country);
        }
        if let Some(city) = input.city {
            active.city = Set(city);
        }
        if let Some(lat) = input.lat {
            active.lat = Set(lat);
        }
        if let Some(lng) = input.lng {
            active.lng = Set(lng);
        }

        self.location_repo.update(active).await
    }

    /// Delete a location. Listings cascade at the store level. Deleting a
    /// missing id is a no-op.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.location_repo.delete_by_id(id).await
    }
}
