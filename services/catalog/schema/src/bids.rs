use sea_orm::entity::prelude::*;

/// Monetary offer on a listing. `user_id` is cleared when the bidder is deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bids")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub auction_listing_id: Uuid,
    pub user_id: Option<Uuid>,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))")]
    pub amount: Decimal,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auction_listings::Entity",
        from = "Column::AuctionListingId",
        to = "super::auction_listings::Column::Id"
    )]
    AuctionListing,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::auction_listings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionListing.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
