//! Listing image entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Listing image entity. Images live and die with their listing.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "image")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Listing this image belongs to.
    pub listing_id: String,

    pub url: String,

    /// Display position within the listing's gallery, 0 first.
    pub order: i32,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::listing::Entity",
        from = "Column::ListingId",
        to = "super::listing::Column::Id"
    )]
    Listing,
}

impl Related<super::listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Listing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Default gallery position for new images.
pub const DEFAULT_ORDER: i32 = 0;
