use rust_decimal::Decimal;
use sea_orm_migration::MigratorTrait;

use auctions_catalog::config::CatalogConfig;
use auctions_catalog::domain::types::{
    AuctionListing, Bid, Category, NewBid, NewCategory, NewListing, NewUser, User,
};
use auctions_catalog::state::Catalog;
use auctions_catalog::usecase::bid::PlaceBidUseCase;
use auctions_catalog::usecase::category::CreateCategoryUseCase;
use auctions_catalog::usecase::listing::CreateListingUseCase;
use auctions_catalog::usecase::user::CreateUserUseCase;
use auctions_catalog_migration::Migrator;
use auctions_core::config::Config;
use auctions_domain::id::{CategoryId, ListingId, UserId};

/// Fresh in-memory SQLite catalog with every migration applied.
///
/// A single pooled connection keeps the in-memory database alive and shared.
pub async fn test_catalog() -> Catalog {
    auctions_core::tracing::init_test_tracing();
    let config = CatalogConfig::from_pairs([
        ("DATABASE_URL".to_string(), "sqlite::memory:".to_string()),
        ("DATABASE_MAX_CONNECTIONS".to_string(), "1".to_string()),
    ])
    .unwrap();
    let catalog = Catalog::connect(&config).await.unwrap();
    Migrator::up(&catalog.db, None).await.unwrap();
    catalog
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub async fn create_user(catalog: &Catalog, username: &str) -> User {
    CreateUserUseCase {
        repo: catalog.user_repo(),
    }
    .execute(NewUser {
        username: username.into(),
        email: Some(format!("{username}@example.com")),
    })
    .await
    .unwrap()
}

pub async fn create_category(catalog: &Catalog, code: &str, name: &str) -> Category {
    CreateCategoryUseCase {
        repo: catalog.category_repo(),
    }
    .execute(NewCategory {
        code: code.into(),
        name: name.into(),
    })
    .await
    .unwrap()
}

pub async fn create_listing(
    catalog: &Catalog,
    owner: UserId,
    title: &str,
    starting_bid: &str,
    category_id: Option<CategoryId>,
) -> AuctionListing {
    let mut input = NewListing::new(owner, title);
    input.starting_bid = dec(starting_bid);
    input.category_id = category_id;
    CreateListingUseCase {
        repo: catalog.listing_repo(),
        users: catalog.user_repo(),
        categories: catalog.category_repo(),
    }
    .execute(input)
    .await
    .unwrap()
}

pub async fn place_bid(
    catalog: &Catalog,
    listing_id: ListingId,
    bidder: UserId,
    amount: &str,
) -> Bid {
    PlaceBidUseCase {
        repo: catalog.bid_repo(),
        listings: catalog.listing_repo(),
        users: catalog.user_repo(),
    }
    .execute(NewBid {
        listing_id,
        user_id: Some(bidder),
        amount: dec(amount),
    })
    .await
    .unwrap()
}
