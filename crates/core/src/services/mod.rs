//! Business logic services.

pub mod category;
pub mod favorite;
pub mod listing;
pub mod location;
pub mod user;

pub use category::{CategoryService, CreateCategoryInput, UpdateCategoryInput};
pub use favorite::{FavoriteInput, FavoriteService};
pub use listing::{AddImageInput, CreateListingInput, ListingService, UpdateListingInput};
pub use location::{CreateLocationInput, LocationService, UpdateLocationInput};
pub use user::{CreateUserInput, UpdateUserInput, UserService};
