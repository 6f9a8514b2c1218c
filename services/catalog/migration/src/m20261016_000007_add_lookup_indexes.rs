use sea_orm_migration::prelude::*;

/// Indexes backing the per-owner collection lookups.
#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEXES: [(&str, IndexedTable, IndexedColumn); 6] = [
    (
        "idx_auction_listings_user_id",
        IndexedTable::AuctionListings,
        IndexedColumn::UserId,
    ),
    (
        "idx_auction_listings_category_id",
        IndexedTable::AuctionListings,
        IndexedColumn::CategoryId,
    ),
    (
        "idx_bids_auction_listing_id",
        IndexedTable::Bids,
        IndexedColumn::AuctionListingId,
    ),
    ("idx_bids_user_id", IndexedTable::Bids, IndexedColumn::UserId),
    (
        "idx_comments_auction_listing_id",
        IndexedTable::Comments,
        IndexedColumn::AuctionListingId,
    ),
    (
        "idx_wishlist_items_auction_listing_id",
        IndexedTable::WishlistItems,
        IndexedColumn::AuctionListingId,
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .table(table)
                        .col(column)
                        .name(name)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in INDEXES.into_iter().rev() {
            manager
                .drop_index(Index::drop().name(name).table(table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden, Clone, Copy)]
enum IndexedTable {
    AuctionListings,
    Bids,
    Comments,
    WishlistItems,
}

#[derive(Iden, Clone, Copy)]
enum IndexedColumn {
    UserId,
    CategoryId,
    AuctionListingId,
}
