//! Category endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::Serialize;
use tradepost_common::{AppResult, PageDefaults};
use tradepost_core::{CreateCategoryInput, UpdateCategoryInput};
use tradepost_db::entities::category;

use crate::{
    extractors::{AppJson, PageQuery},
    response::{no_content, ApiResponse, PagedResponse},
    state::AppState,
};

const PAGE_DEFAULTS: PageDefaults = PageDefaults::with_limit(50);

/// Category response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<String>,
    pub created_at: String,
}

impl From<category::Model> for CategoryResponse {
    fn from(c: category::Model) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            parent_id: c.parent_id,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// List categories (paginated).
async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<PagedResponse<CategoryResponse>> {
    let page = query.normalize(PAGE_DEFAULTS);
    let categories = state.category_service.list(page.limit, page.offset).await?;

    Ok(PagedResponse::new(
        categories.into_iter().map(Into::into).collect(),
        page,
    ))
}

/// Get a category by ID.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<CategoryResponse>> {
    let category = state.category_service.get(&id).await?;
    Ok(ApiResponse::ok(category.into()))
}

/// Create a category.
async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategoryInput>,
) -> AppResult<ApiResponse<CategoryResponse>> {
    let category = state.category_service.create(input).await?;
    Ok(ApiResponse::created(category.into()))
}

/// Partially update a category.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateCategoryInput>,
) -> AppResult<ApiResponse<CategoryResponse>> {
    let category = state.category_service.update(&id, input).await?;
    Ok(ApiResponse::ok(category.into()))
}

/// Delete a category.
async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.category_service.delete(&id).await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(show).put(update).delete(remove))
}
