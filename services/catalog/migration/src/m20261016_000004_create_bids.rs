use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

const CLOSING_BID_FK: &str = "fk_auction_listings_closing_bid_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bids::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bids::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Bids::AuctionListingId).uuid().not_null())
                    .col(ColumnDef::new(Bids::UserId).uuid().null())
                    .col(ColumnDef::new(Bids::Amount).decimal_len(8, 2).not_null())
                    .col(
                        ColumnDef::new(Bids::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bids_auction_listing_id")
                            .from(Bids::Table, Bids::AuctionListingId)
                            .to(AuctionListings::Table, AuctionListings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bids_user_id")
                            .from(Bids::Table, Bids::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        if manager.get_database_backend() != DatabaseBackend::Sqlite {
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name(CLOSING_BID_FK)
                        .from(AuctionListings::Table, AuctionListings::ClosingBidId)
                        .to(Bids::Table, Bids::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() != DatabaseBackend::Sqlite {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(CLOSING_BID_FK)
                        .table(AuctionListings::Table)
                        .to_owned(),
                )
                .await?;
        }
        manager
            .drop_table(Table::drop().table(Bids::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Bids {
    Table,
    Id,
    AuctionListingId,
    UserId,
    Amount,
    CreatedAt,
}

#[derive(Iden)]
enum AuctionListings {
    Table,
    Id,
    ClosingBidId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
