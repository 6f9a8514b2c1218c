use sea_orm_migration::prelude::*;

mod m20261016_000001_create_users;
mod m20261016_000002_create_categories;
mod m20261016_000003_create_auction_listings;
mod m20261016_000004_create_bids;
mod m20261016_000005_create_comments;
mod m20261016_000006_create_wishlist_items;
mod m20261016_000007_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_users::Migration),
            Box::new(m20261016_000002_create_categories::Migration),
            Box::new(m20261016_000003_create_auction_listings::Migration),
            Box::new(m20261016_000004_create_bids::Migration),
            Box::new(m20261016_000005_create_comments::Migration),
            Box::new(m20261016_000006_create_wishlist_items::Migration),
            Box::new(m20261016_000007_add_lookup_indexes::Migration),
        ]
    }
}
