//! Database entities.

pub mod category;
pub mod favorite;
pub mod image;
pub mod listing;
pub mod location;
pub mod user;

pub use category::Entity as Category;
pub use favorite::Entity as Favorite;
pub use image::Entity as Image;
pub use listing::Entity as Listing;
pub use location::Entity as Location;
pub use user::Entity as User;
