//! API endpoints.

mod categories;
mod favorites;
mod health;
mod listings;
mod locations;
mod users;

use axum::Router;

use crate::state::AppState;

/// Create the API router, mounted under `/api` by the server.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/categories", categories::router())
        .nest("/locations", locations::router())
        .nest("/listings", listings::router())
        .nest("/favorites", favorites::router())
}

/// Create the root-level health router.
pub fn health_router() -> Router<AppState> {
    health::router()
}
