//! User endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::Serialize;
use tradepost_common::{AppResult, PageDefaults};
use tradepost_core::{CreateUserInput, UpdateUserInput};
use tradepost_db::entities::user;

use crate::{
    extractors::{AppJson, PageQuery},
    response::{no_content, ApiResponse, PagedResponse},
    state::AppState,
};

const PAGE_DEFAULTS: PageDefaults = PageDefaults::with_limit(10);

/// User response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<user::Model> for UserResponse {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            email: u.email,
            password_hash: u.password_hash,
            name: u.name,
            phone: u.phone,
            created_at: u.created_at.to_rfc3339(),
            updated_at: u.updated_at.to_rfc3339(),
        }
    }
}

/// List users (paginated).
async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<PagedResponse<UserResponse>> {
    let page = query.normalize(PAGE_DEFAULTS);
    let users = state.user_service.list(page.limit, page.offset).await?;

    Ok(PagedResponse::new(
        users.into_iter().map(Into::into).collect(),
        page,
    ))
}

/// Get a user by ID.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state.user_service.get(&id).await?;
    Ok(ApiResponse::ok(user.into()))
}

/// Create a user.
async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUserInput>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state.user_service.create(input).await?;
    Ok(ApiResponse::created(user.into()))
}

/// Partially update a user.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateUserInput>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state.user_service.update(&id, input).await?;
    Ok(ApiResponse::ok(user.into()))
}

/// Delete a user.
async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.user_service.delete(&id).await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(show).put(update).delete(remove))
}
