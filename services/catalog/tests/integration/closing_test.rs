use auctions_catalog::domain::repository::{BidRepository, ListingRepository};
use auctions_catalog::domain::types::ListingUpdate;
use auctions_catalog::error::CatalogError;
use auctions_catalog::usecase::listing::{
    CloseListingUseCase, SetClosingBidUseCase, UpdateListingUseCase,
};
use auctions_domain::validation::ValidationError;

use crate::helpers::{create_category, create_listing, create_user, dec, place_bid, test_catalog};

#[tokio::test]
async fn should_close_with_highest_bid() {
    let catalog = test_catalog().await;
    let alice = create_user(&catalog, "alice").await;
    let bob = create_user(&catalog, "bob").await;
    let carol = create_user(&catalog, "carol").await;
    let lamp = create_listing(&catalog, alice.id, "Lamp", "10.00", None).await;
    place_bid(&catalog, lamp.id, bob.id, "12.00").await;
    let top = place_bid(&catalog, lamp.id, carol.id, "18.50").await;
    place_bid(&catalog, lamp.id, bob.id, "14.00").await;

    let highest = catalog
        .bid_repo()
        .highest_for_listing(lamp.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(highest.id, top.id);

    let close = CloseListingUseCase {
        repo: catalog.listing_repo(),
        bids: catalog.bid_repo(),
    };
    let closed = close.execute(lamp.id).await.unwrap();
    assert!(!closed.is_active);
    assert_eq!(closed.closing_bid_id, Some(top.id));

    let stored = catalog
        .listing_repo()
        .find_by_id(lamp.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, closed);
    assert!(catalog.listing_repo().list_active().await.unwrap().is_empty());

    // A second close leaves the stored state alone.
    place_bid(&catalog, lamp.id, bob.id, "99.00").await;
    assert_eq!(close.execute(lamp.id).await.unwrap(), stored);
}

#[tokio::test]
async fn should_reject_closing_bid_from_another_listing() {
    let catalog = test_catalog().await;
    let alice = create_user(&catalog, "alice").await;
    let bob = create_user(&catalog, "bob").await;
    let lamp = create_listing(&catalog, alice.id, "Lamp", "10.00", None).await;
    let desk = create_listing(&catalog, alice.id, "Desk", "40.00", None).await;
    let desk_bid = place_bid(&catalog, desk.id, bob.id, "41.00").await;

    let result = SetClosingBidUseCase {
        repo: catalog.listing_repo(),
        bids: catalog.bid_repo(),
    }
    .execute(lamp.id, desk_bid.id)
    .await;
    assert!(matches!(
        result,
        Err(CatalogError::Validation(ValidationError::ClosingBidMismatch))
    ));

    let stored = catalog
        .listing_repo()
        .find_by_id(lamp.id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.is_active);
    assert_eq!(stored.closing_bid_id, None);
}

#[tokio::test]
async fn should_persist_listing_update() {
    let catalog = test_catalog().await;
    let alice = create_user(&catalog, "alice").await;
    let home = create_category(&catalog, "HOME", "Home").await;
    let lamp = create_listing(&catalog, alice.id, "Lamp", "10.00", None).await;

    UpdateListingUseCase {
        repo: catalog.listing_repo(),
        categories: catalog.category_repo(),
    }
    .execute(
        lamp.id,
        ListingUpdate {
            description: Some(Some("Brass, 1970s".into())),
            image: Some(Some("https://example.com/lamp.jpg".into())),
            category_id: Some(Some(home.id)),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let stored = catalog
        .listing_repo()
        .find_by_id(lamp.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.description.as_deref(), Some("Brass, 1970s"));
    assert_eq!(stored.image.as_deref(), Some("https://example.com/lamp.jpg"));
    assert_eq!(stored.category_id, Some(home.id));
    assert_eq!(stored.starting_bid, dec("10.00"));
    assert_eq!(stored.user_id, alice.id);
}
