use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create()
            .table(AuctionListings::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(AuctionListings::Id)
                    .uuid()
                    .not_null()
                    .primary_key(),
            )
            .col(
                ColumnDef::new(AuctionListings::Title)
                    .string_len(255)
                    .not_null(),
            )
            .col(ColumnDef::new(AuctionListings::Description).text().null())
            .col(
                ColumnDef::new(AuctionListings::StartingBid)
                    .decimal_len(8, 2)
                    .not_null()
                    .default(0)
                    .check(Expr::col(AuctionListings::StartingBid).gte(0)),
            )
            .col(ColumnDef::new(AuctionListings::Image).text().null())
            .col(
                ColumnDef::new(AuctionListings::IsActive)
                    .boolean()
                    .not_null()
                    .default(true),
            )
            .col(ColumnDef::new(AuctionListings::UserId).uuid().not_null())
            .col(ColumnDef::new(AuctionListings::CategoryId).uuid().null())
            .col(
                ColumnDef::new(AuctionListings::ClosingBidId)
                    .uuid()
                    .null()
                    .unique_key(),
            )
            .col(
                ColumnDef::new(AuctionListings::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_auction_listings_user_id")
                    .from(AuctionListings::Table, AuctionListings::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_auction_listings_category_id")
                    .from(AuctionListings::Table, AuctionListings::CategoryId)
                    .to(Categories::Table, Categories::Id)
                    .on_delete(ForeignKeyAction::SetNull),
            )
            .to_owned();

        // SQLite resolves REFERENCES lazily and cannot add constraints later,
        // so the closing-bid key is declared here. Other backends add it once
        // `bids` exists (see the bids migration).
        if manager.get_database_backend() == DatabaseBackend::Sqlite {
            table.foreign_key(
                ForeignKey::create()
                    .name("fk_auction_listings_closing_bid_id")
                    .from(AuctionListings::Table, AuctionListings::ClosingBidId)
                    .to(Bids::Table, Bids::Id)
                    .on_delete(ForeignKeyAction::SetNull),
            );
        }

        manager.create_table(table).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuctionListings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AuctionListings {
    Table,
    Id,
    Title,
    Description,
    StartingBid,
    Image,
    IsActive,
    UserId,
    CategoryId,
    ClosingBidId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
}

#[derive(Iden)]
enum Bids {
    Table,
    Id,
}
