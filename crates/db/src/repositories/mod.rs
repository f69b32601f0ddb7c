//! Database repositories.

pub mod category;
pub mod favorite;
pub mod image;
pub mod listing;
pub mod location;
pub mod user;

pub use category::CategoryRepository;
pub use favorite::FavoriteRepository;
pub use image::ImageRepository;
pub use listing::ListingRepository;
pub use location::LocationRepository;
pub use user::UserRepository;

use sea_orm::{DbErr, SqlErr};
use tradepost_common::AppError;

/// Translate a database error into an application error.
///
/// Unique and foreign-key violations become [`AppError::Constraint`] so the
/// boundary can distinguish them from a missing primary record or a store
/// failure; everything else is a store-level [`AppError::Database`].
pub(crate) fn map_db_err(e: DbErr) -> AppError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            AppError::Constraint(format!("unique constraint violated: {msg}"))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            AppError::Constraint(format!("foreign key constraint violated: {msg}"))
        }
        _ => AppError::Database(e.to_string()),
    }
}
