use sea_orm::entity::prelude::*;

/// Membership row of a user's wishlist.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wishlist_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub auction_listing_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::auction_listings::Entity",
        from = "Column::AuctionListingId",
        to = "super::auction_listings::Column::Id"
    )]
    AuctionListing,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::auction_listings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionListing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
