//! Listing entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Listing entity. A listing's existence is contingent on its user,
/// category, and location; deleting any of them cascades to the listing.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "listing")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Asking price in `currency` units.
    #[sea_orm(column_type = "Double")]
    pub price: f64,

    /// ISO 4217 currency code, "USD" by default.
    pub currency: String,

    /// Category this listing is filed under. Immutable after creation.
    pub category_id: String,

    /// Location the item is offered at. Immutable after creation.
    pub location_id: String,

    /// Owning user. Immutable after creation.
    pub user_id: String,

    /// Lifecycle status: active, sold, or archived.
    pub status: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,

    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id"
    )]
    Location,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,

    #[sea_orm(has_many = "super::image::Entity")]
    Images,

    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorites,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Known listing statuses. The column is free-form text; these are the
/// values the service layer accepts.
pub const STATUSES: [&str; 3] = ["active", "sold", "archived"];

/// Default status for new listings.
pub const DEFAULT_STATUS: &str = "active";

/// Default currency for new listings.
pub const DEFAULT_CURRENCY: &str = "USD";
