use sea_orm::entity::prelude::*;

/// Classification tag for listings.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique, column_type = "String(StringLen::N(5))")]
    pub code: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::auction_listings::Entity")]
    AuctionListings,
}

impl Related<super::auction_listings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionListings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
