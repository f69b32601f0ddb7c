//! HTTP API layer for tradepost.
//!
//! This crate provides the REST API surface:
//!
//! - **Endpoints**: one module per resource (users, categories, locations,
//!   listings, favorites) plus the health probe
//! - **Extractors**: JSON bodies with client-error rejections, pagination
//!   query parameters
//! - **Responses**: `{data}` / `{data, page, limit}` envelopes
//!
//! Built on Axum 0.8.

pub mod endpoints;
pub mod extractors;
pub mod response;
pub mod state;

pub use endpoints::{health_router, router};
pub use state::AppState;
