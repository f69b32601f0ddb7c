//! Shared application state.

#![allow(missing_docs)]

use tradepost_core::{
    CategoryService, FavoriteService, ListingService, LocationService, UserService,
};

/// Application state: one service per resource, all sharing the single
/// store connection injected at startup.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub category_service: CategoryService,
    pub location_service: LocationService,
    pub listing_service: ListingService,
    pub favorite_service: FavoriteService,
}
