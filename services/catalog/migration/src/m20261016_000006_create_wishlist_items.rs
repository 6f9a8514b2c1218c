use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WishlistItems::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(WishlistItems::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(WishlistItems::AuctionListingId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(WishlistItems::UserId)
                            .col(WishlistItems::AuctionListingId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_items_user_id")
                            .from(WishlistItems::Table, WishlistItems::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_items_auction_listing_id")
                            .from(WishlistItems::Table, WishlistItems::AuctionListingId)
                            .to(AuctionListings::Table, AuctionListings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WishlistItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WishlistItems {
    Table,
    UserId,
    AuctionListingId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum AuctionListings {
    Table,
    Id,
}
