//! Location endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::Serialize;
use tradepost_common::{AppResult, PageDefaults};
use tradepost_core::{CreateLocationInput, UpdateLocationInput};
use tradepost_db::entities::location;

use crate::{
    extractors::{AppJson, PageQuery},
    response::{no_content, ApiResponse, PagedResponse},
    state::AppState,
};

const PAGE_DEFAULTS: PageDefaults = PageDefaults::with_limit(50);

/// Location response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub id: String,
    pub country: String,
    pub city: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: String,
}

impl From<location::Model> for LocationResponse {
    fn from(l: location::Model) -> Self {
        Self {
            id: l.id,
            country: l.country,
            city: l.city,
            lat: l.lat,
            lng: l.lng,
            created_at: l.created_at.to_rfc3339(),
        }
    }
}

/// List locations (paginated).
async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<PagedResponse<LocationResponse>> {
    let page = query.normalize(PAGE_DEFAULTS);
    let locations = state.location_service.list(page.limit, page.offset).await?;

    Ok(PagedResponse::new(
        locations.into_iter().map(Into::into).collect(),
        page,
    ))
}

/// Get a location by ID.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<LocationResponse>> {
    let location = state.location_service.get(&id).await?;
    Ok(ApiResponse::ok(location.into()))
}

/// Create a location.
async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateLocationInput>,
) -> AppResult<ApiResponse<LocationResponse>> {
    let location = state.location_service.create(input).await?;
    Ok(ApiResponse::created(location.into()))
}

/// Partially update a location.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateLocationInput>,
) -> AppResult<ApiResponse<LocationResponse>> {
    let location = state.location_service.update(&id, input).await?;
    Ok(ApiResponse::ok(location.into()))
}

/// Delete a location.
async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.location_service.delete(&id).await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(show).put(update).delete(remove))
}
