//! Category service.

use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;
use tradepost_common::{AppError, AppResult, IdGenerator};
use tradepost_db::entities::category;
use tradepost_db::repositories::CategoryRepository;
use validator::Validate;

/// Input for creating a category.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryInput {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(length(min = 1, max = 128))]
    pub slug: String,
    pub parent_id: Option<String>,
}

/// Input for updating a category. The parent link is the one foreign key
/// that stays mutable after creation; an explicit null detaches the
/// category from its parent.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryInput {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub slug: Option<String>,
    pub parent_id: Option<Option<String>>,
}

/// Service for managing categories.
#[derive(Clone)]
pub struct CategoryService {
    category_repo: CategoryRepository,
    id_gen: IdGenerator,
}

impl CategoryService {
    /// Create a new category service.
    #[must_use]
    pub const fn new(category_repo: CategoryRepository) -> Self {
        Self {
            category_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Get a category by ID.
    pub async fn get(&self, id: &str) -> AppResult<category::Model> {
        self.category_repo.get_by_id(id).await
    }

    /// List categories (paginated).
    pub async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<category::Model>> {
        self.category_repo.list(limit, offset).await
    }

    /// Create a new category.
    pub async fn create(&self, input: CreateCategoryInput) -> AppResult<category::Model> {
        input.validate()?;

        if !is_valid_slug(&input.slug) {
            return Err(AppError::Validation(format!(
                "invalid slug format: {}",
                input.slug
            )));
        }

        if self.category_repo.find_by_slug(&input.slug).await?.is_some() {
            return Err(AppError::Constraint(format!(
                "slug {} is already in use",
                input.slug
            )));
        }

        if let Some(ref parent_id) = input.parent_id {
            if self.category_repo.find_by_id(parent_id).await?.is_none() {
                return Err(AppError::Constraint(format!(
                    "parent category {parent_id} does not exist"
                )));
            }
        }

        let id = self.id_gen.generate();

        let model = category::ActiveModel {
            id: Set(id),
            name: Set(input.name),
            slug: Set(input.slug),
            parent_id: Set(input.parent_id),
            created_at: Set(Utc::now().into()),
        };

        self.category_repo.create(model).await
    }

    /// Update a category with a partial payload.
    pub async fn update(&self, id: &str, input: UpdateCategoryInput) -> AppResult<category::Model> {
        input.validate()?;

        let current = self.category_repo.get_by_id(id).await?;

        if let Some(ref slug) = input.slug {
            if !is_valid_slug(slug) {
                return Err(AppError::Validation(format!("invalid slug format: {slug}")));
            }
            if *slug != current.slug
                && self.category_repo.find_by_slug(slug).await?.is_some()
            {
                return Err(AppError::Constraint(format!("slug {slug} is already in use")));
            }
        }

        if let Some(Some(ref parent_id)) = input.parent_id {
            if self.category_repo.find_by_id(parent_id).await?.is_none() {
                return Err(AppError::Constraint(format!(
                    "parent category {parent_id} does not exist"
                )));
            }
        }

        let mut active: category::ActiveModel = current.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(slug) = input.slug {
            active.slug = Set(slug);
        }
        if let Some(parent_id) = input.parent_id {
            active.parent_id = Set(parent_id);
        }

        self.category_repo.update(active).await
    }

    /// Delete a category. Children are detached and listings cascade at
    /// the store level. Deleting a missing id is a no-op.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.category_repo.delete_by_id(id).await
    }
}

/// Validate slug format: lowercase alphanumeric runs joined by single
/// hyphens.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn create_test_category(id: &str, slug: &str) -> category::Model {
        category::Model {
            id: id.to_string(),
            name: "Electronics".to_string(),
            slug: slug.to_string(),
            parent_id: None,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn test_slug_format() {
        assert!(is_valid_slug("electronics"));
        assert!(is_valid_slug("home-garden"));
        assert!(is_valid_slug("video-games-2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Electronics"));
        assert!(!is_valid_slug("home--garden"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("with space"));
    }

    #[tokio::test]
    async fn test_create_rejects_taken_slug() {
        let existing = create_test_category("cat1", "electronics");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[existing]])
                .into_connection(),
        );
        let service = CategoryService::new(CategoryRepository::new(db));

        let input = CreateCategoryInput {
            name: "Electronics".to_string(),
            slug: "electronics".to_string(),
            parent_id: None,
        };

        let result = service.create(input).await;
        assert!(matches!(result, Err(AppError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_missing_parent() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                // Slug check finds nothing
                .append_query_results([Vec::<category::Model>::new()])
                // Parent lookup finds nothing
                .append_query_results([Vec::<category::Model>::new()])
                .into_connection(),
        );
        let service = CategoryService::new(CategoryRepository::new(db));

        let input = CreateCategoryInput {
            name: "Phones".to_string(),
            slug: "phones".to_string(),
            parent_id: Some("missing".to_string()),
        };

        let result = service.create(input).await;
        assert!(matches!(result, Err(AppError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_create_top_level_category() {
        let created = create_test_category("cat1", "electronics");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<category::Model>::new()])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .append_query_results([[created]])
                .into_connection(),
        );
        let service = CategoryService::new(CategoryRepository::new(db));

        let input = CreateCategoryInput {
            name: "Electronics".to_string(),
            slug: "electronics".to_string(),
            parent_id: None,
        };

        let result = service.create(input).await.unwrap();
        assert_eq!(result.slug, "electronics");
    }

    #[tokio::test]
    async fn test_update_missing_category_is_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<category::Model>::new()])
                .into_connection(),
        );
        let service = CategoryService::new(CategoryRepository::new(db));

        let result = service
            .update("nonexistent", UpdateCategoryInput::default())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
