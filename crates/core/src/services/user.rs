//! User service.

use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;
use tradepost_common::{AppError, AppResult, IdGenerator};
use tradepost_db::entities::user;
use tradepost_db::repositories::UserRepository;
use validator::Validate;

/// Input for creating a user.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 256))]
    pub password_hash: String,
    #[validate(length(max = 256))]
    pub name: Option<String>,
    #[validate(length(max = 64))]
    pub phone: Option<String>,
}

/// Input for updating a user. Absent fields are left untouched; explicit
/// nulls clear the nullable fields.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    #[validate(email)]
    pub email: Option<String>,
    pub name: Option<Option<String>>,
    pub phone: Option<Option<String>>,
}

/// Service for managing users.
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    id_gen: IdGenerator,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub const fn new(user_repo: UserRepository) -> Self {
        Self {
            user_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Get a user by ID.
    pub async fn get(&self, id: &str) -> AppResult<user::Model> {
        self.user_repo.get_by_id(id).await
    }

    /// List users (paginated).
    pub async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<user::Model>> {
        self.user_repo.list(limit, offset).await
    }

    /// Create a new user.
    pub async fn create(&self, input: CreateUserInput) -> AppResult<user::Model> {
        input.validate()?;

        if self.user_repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::Constraint(format!(
                "email {} is already registered",
                input.email
            )));
        }

        let id = self.id_gen.generate();
        let now = Utc::now();

        let model = user::ActiveModel {
            id: Set(id),
            email: Set(input.email),
            password_hash: Set(input.password_hash),
            name: Set(input.name),
            phone: Set(input.phone),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        self.user_repo.create(model).await
    }

    /// Update a user with a partial payload.
    pub async fn update(&self, id: &str, input: UpdateUserInput) -> AppResult<user::Model> {
        input.validate()?;

        let user = self.user_repo.get_by_id(id).await?;

        if let Some(ref email) = input.email {
            if *email != user.email
                && self.user_repo.find_by_email(email).await?.is_some()
            {
                return Err(AppError::Constraint(format!(
                    "email {email} is already registered"
                )));
            }
        }

        let mut active: user::ActiveModel = user.into();

        if let Some(email) = input.email {
            active.email = Set(email);
        }
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(phone) = input.phone {
            active.phone = Set(phone);
        }

        active.updated_at = Set(Utc::now().into());

        self.user_repo.update(active).await
    }

    /// Delete a user. Listings and favorites cascade at the store level.
    /// Deleting a missing id is a no-op.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.user_repo.delete_by_id(id).await
    }
}
