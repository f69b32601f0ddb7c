//! Favorite endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tradepost_common::{AppResult, PageDefaults};
use tradepost_core::FavoriteInput;
use tradepost_db::entities::favorite;

use crate::{
    extractors::{AppJson, PageQuery},
    response::{no_content, ApiResponse, PagedResponse},
    state::AppState,
};

const PAGE_DEFAULTS: PageDefaults = PageDefaults::with_limit(20);

/// Favorite response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub id: String,
    pub user_id: String,
    pub listing_id: String,
    pub created_at: String,
}

impl From<favorite::Model> for FavoriteResponse {
    fn from(f: favorite::Model) -> Self {
        Self {
            id: f.id,
            user_id: f.user_id,
            listing_id: f.listing_id,
            created_at: f.created_at.to_rfc3339(),
        }
    }
}

/// List a user's favorites (paginated).
async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> AppResult<PagedResponse<FavoriteResponse>> {
    let page = query.normalize(PAGE_DEFAULTS);
    let favorites = state
        .favorite_service
        .list_for_user(&user_id, page.limit, page.offset)
        .await?;

    Ok(PagedResponse::new(
        favorites.into_iter().map(Into::into).collect(),
        page,
    ))
}

/// Add a favorite by `(userId, listingId)`.
async fn add(
    State(state): State<AppState>,
    AppJson(input): AppJson<FavoriteInput>,
) -> AppResult<ApiResponse<FavoriteResponse>> {
    let favorite = state.favorite_service.add(input).await?;
    Ok(ApiResponse::created(favorite.into()))
}

/// Remove a favorite by `(userId, listingId)`.
async fn remove(
    State(state): State<AppState>,
    AppJson(input): AppJson<FavoriteInput>,
) -> AppResult<StatusCode> {
    state.favorite_service.remove(input).await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add).delete(remove))
        .route("/user/{user_id}", get(list_for_user))
}
