//! Listing endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tradepost_common::{AppResult, PageDefaults};
use tradepost_core::{AddImageInput, CreateListingInput, UpdateListingInput};
use tradepost_db::entities::{image, listing};

use crate::{
    extractors::{AppJson, PageQuery},
    response::{no_content, ApiResponse, PagedResponse},
    state::AppState,
};

const PAGE_DEFAULTS: PageDefaults = PageDefaults::with_limit(20);

/// Listing response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub category_id: String,
    pub location_id: String,
    pub user_id: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<listing::Model> for ListingResponse {
    fn from(l: listing::Model) -> Self {
        Self {
            id: l.id,
            title: l.title,
            description: l.description,
            price: l.price,
            currency: l.currency,
            category_id: l.category_id,
            location_id: l.location_id,
            user_id: l.user_id,
            status: l.status,
            created_at: l.created_at.to_rfc3339(),
            updated_at: l.updated_at.to_rfc3339(),
        }
    }
}

/// Image response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub id: String,
    pub listing_id: String,
    pub url: String,
    pub order: i32,
    pub created_at: String,
}

impl From<image::Model> for ImageResponse {
    fn from(i: image::Model) -> Self {
        Self {
            id: i.id,
            listing_id: i.listing_id,
            url: i.url,
            order: i.order,
            created_at: i.created_at.to_rfc3339(),
        }
    }
}

/// Listing with its gallery, returned by the detail endpoint.
#[derive(Serialize)]
pub struct ListingDetailResponse {
    #[serde(flatten)]
    pub listing: ListingResponse,
    pub images: Vec<ImageResponse>,
}

/// List listings (paginated, newest first).
async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<PagedResponse<ListingResponse>> {
    let page = query.normalize(PAGE_DEFAULTS);
    let listings = state.listing_service.list(page.limit, page.offset).await?;

    Ok(PagedResponse::new(
        listings.into_iter().map(Into::into).collect(),
        page,
    ))
}

/// Get a listing with its images.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ListingDetailResponse>> {
    let (listing, images) = state.listing_service.get_with_images(&id).await?;

    Ok(ApiResponse::ok(ListingDetailResponse {
        listing: listing.into(),
        images: images.into_iter().map(Into::into).collect(),
    }))
}

/// Create a listing.
async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateListingInput>,
) -> AppResult<ApiResponse<ListingResponse>> {
    let listing = state.listing_service.create(input).await?;
    Ok(ApiResponse::created(listing.into()))
}

/// Partially update a listing.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateListingInput>,
) -> AppResult<ApiResponse<ListingResponse>> {
    let listing = state.listing_service.update(&id, input).await?;
    Ok(ApiResponse::ok(listing.into()))
}

/// Delete a listing.
async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.listing_service.delete(&id).await?;
    Ok(no_content())
}

/// Attach an image to a listing.
async fn add_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<AddImageInput>,
) -> AppResult<ApiResponse<ImageResponse>> {
    let image = state.listing_service.add_image(&id, input).await?;
    Ok(ApiResponse::created(image.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(show).put(update).delete(remove))
        .route("/{id}/images", post(add_image))
}
