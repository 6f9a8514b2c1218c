use auctions_catalog::domain::repository::WishlistRepository;
use auctions_catalog::usecase::wishlist::{AddToWishlistUseCase, RemoveFromWishlistUseCase};

use crate::helpers::{create_listing, create_user, test_catalog};

#[tokio::test]
async fn should_keep_wishlist_as_a_set() {
    let catalog = test_catalog().await;
    let alice = create_user(&catalog, "alice").await;
    let bob = create_user(&catalog, "bob").await;
    let lamp = create_listing(&catalog, alice.id, "Lamp", "10.00", None).await;
    let desk = create_listing(&catalog, alice.id, "Desk", "40.00", None).await;

    let add = AddToWishlistUseCase {
        repo: catalog.wishlist_repo(),
        users: catalog.user_repo(),
        listings: catalog.listing_repo(),
    };
    assert!(add.execute(bob.id, lamp.id).await.unwrap());
    assert!(!add.execute(bob.id, lamp.id).await.unwrap());
    assert!(add.execute(bob.id, desk.id).await.unwrap());

    let wishlist = catalog.wishlist_repo().list_listings(bob.id).await.unwrap();
    assert_eq!(wishlist.len(), 2);
    assert!(catalog.wishlist_repo().contains(bob.id, lamp.id).await.unwrap());
    assert_eq!(
        catalog.wishlist_repo().list_users(lamp.id).await.unwrap(),
        vec![bob.id]
    );

    let remove = RemoveFromWishlistUseCase {
        repo: catalog.wishlist_repo(),
    };
    assert!(remove.execute(bob.id, lamp.id).await.unwrap());
    assert!(!remove.execute(bob.id, lamp.id).await.unwrap());
    assert!(!catalog.wishlist_repo().contains(bob.id, lamp.id).await.unwrap());

    let titles: Vec<String> = catalog
        .wishlist_repo()
        .list_listings(bob.id)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.title)
        .collect();
    assert_eq!(titles, ["Desk"]);
}
