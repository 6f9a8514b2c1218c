//! In-memory repositories for use-case tests. Deletes mirror the foreign-key
//! actions declared by the migrations.

use std::sync::{Arc, Mutex};

use auctions_domain::id::{BidId, CategoryId, CommentId, ListingId, UserId};

use crate::domain::repository::{
    BidRepository, CategoryRepository, CommentRepository, ListingRepository, UserRepository,
    WishlistRepository,
};
use crate::domain::types::{AuctionListing, Bid, Category, Comment, User};
use crate::error::CatalogError;

#[derive(Default)]
pub struct Tables {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub listings: Vec<AuctionListing>,
    pub bids: Vec<Bid>,
    pub comments: Vec<Comment>,
    pub wishlist: Vec<(UserId, ListingId)>,
}

impl Tables {
    fn delete_listing(&mut self, id: ListingId) -> bool {
        let before = self.listings.len();
        self.listings.retain(|l| l.id != id);
        self.bids.retain(|b| b.listing_id != id);
        self.comments.retain(|c| c.listing_id != id);
        self.wishlist.retain(|(_, l)| *l != id);
        self.listings.len() < before
    }
}

/// One shared store implementing every repository trait; clone it once per
/// repository slot of a use case.
#[derive(Clone, Default)]
pub struct MemoryCatalog {
    pub tables: Arc<Mutex<Tables>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        f(&mut *self.tables.lock().unwrap())
    }
}

impl UserRepository for MemoryCatalog {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, CatalogError> {
        Ok(self.with(|t| t.users.iter().find(|u| u.id == id).cloned()))
    }

    async fn create(&self, user: &User) -> Result<(), CatalogError> {
        self.with(|t| {
            if t.users.iter().any(|u| u.username == user.username) {
                return Err(CatalogError::UsernameTaken);
            }
            t.users.push(user.clone());
            Ok(())
        })
    }

    async fn delete(&self, id: UserId) -> Result<bool, CatalogError> {
        Ok(self.with(|t| {
            let before = t.users.len();
            t.users.retain(|u| u.id != id);
            let owned: Vec<ListingId> = t
                .listings
                .iter()
                .filter(|l| l.user_id == id)
                .map(|l| l.id)
                .collect();
            for listing_id in owned {
                t.delete_listing(listing_id);
            }
            t.comments.retain(|c| c.user_id != id);
            t.wishlist.retain(|(u, _)| *u != id);
            for bid in t.bids.iter_mut().filter(|b| b.user_id == Some(id)) {
                bid.user_id = None;
            }
            t.users.len() < before
        }))
    }
}

impl CategoryRepository for MemoryCatalog {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CatalogError> {
        Ok(self.with(|t| t.categories.iter().find(|c| c.id == id).cloned()))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Category>, CatalogError> {
        Ok(self.with(|t| t.categories.iter().find(|c| c.code == code).cloned()))
    }

    async fn list(&self) -> Result<Vec<Category>, CatalogError> {
        let mut categories = self.with(|t| t.categories.clone());
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn create(&self, category: &Category) -> Result<(), CatalogError> {
        self.with(|t| {
            if t.categories.iter().any(|c| c.code == category.code) {
                return Err(CatalogError::CategoryCodeTaken);
            }
            t.categories.push(category.clone());
            Ok(())
        })
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, CatalogError> {
        Ok(self.with(|t| {
            let before = t.categories.len();
            t.categories.retain(|c| c.id != id);
            for listing in t.listings.iter_mut().filter(|l| l.category_id == Some(id)) {
                listing.category_id = None;
            }
            t.categories.len() < before
        }))
    }
}

impl ListingRepository for MemoryCatalog {
    async fn find_by_id(&self, id: ListingId) -> Result<Option<AuctionListing>, CatalogError> {
        Ok(self.with(|t| t.listings.iter().find(|l| l.id == id).cloned()))
    }

    async fn create(&self, listing: &AuctionListing) -> Result<(), CatalogError> {
        self.with(|t| t.listings.push(listing.clone()));
        Ok(())
    }

    async fn update(&self, listing: &AuctionListing) -> Result<(), CatalogError> {
        self.with(|t| {
            if let Some(stored) = t.listings.iter_mut().find(|l| l.id == listing.id) {
                *stored = AuctionListing {
                    user_id: stored.user_id,
                    starting_bid: stored.starting_bid,
                    created_at: stored.created_at,
                    ..listing.clone()
                };
            }
        });
        Ok(())
    }

    async fn delete(&self, id: ListingId) -> Result<bool, CatalogError> {
        Ok(self.with(|t| t.delete_listing(id)))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<AuctionListing>, CatalogError> {
        Ok(self.with(|t| {
            t.listings
                .iter()
                .filter(|l| l.user_id == user_id)
                .cloned()
                .collect()
        }))
    }

    async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<AuctionListing>, CatalogError> {
        Ok(self.with(|t| {
            t.listings
                .iter()
                .filter(|l| l.category_id == Some(category_id))
                .cloned()
                .collect()
        }))
    }

    async fn list_active(&self) -> Result<Vec<AuctionListing>, CatalogError> {
        Ok(self.with(|t| t.listings.iter().filter(|l| l.is_active).cloned().collect()))
    }
}

impl BidRepository for MemoryCatalog {
    async fn find_by_id(&self, id: BidId) -> Result<Option<Bid>, CatalogError> {
        Ok(self.with(|t| t.bids.iter().find(|b| b.id == id).cloned()))
    }

    async fn create(&self, bid: &Bid) -> Result<(), CatalogError> {
        self.with(|t| t.bids.push(bid.clone()));
        Ok(())
    }

    async fn delete(&self, id: BidId) -> Result<bool, CatalogError> {
        Ok(self.with(|t| {
            let before = t.bids.len();
            t.bids.retain(|b| b.id != id);
            for listing in t.listings.iter_mut().filter(|l| l.closing_bid_id == Some(id)) {
                listing.closing_bid_id = None;
            }
            t.bids.len() < before
        }))
    }

    async fn list_by_listing(&self, listing_id: ListingId) -> Result<Vec<Bid>, CatalogError> {
        Ok(self.with(|t| {
            t.bids
                .iter()
                .filter(|b| b.listing_id == listing_id)
                .cloned()
                .collect()
        }))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Bid>, CatalogError> {
        Ok(self.with(|t| {
            t.bids
                .iter()
                .filter(|b| b.user_id == Some(user_id))
                .cloned()
                .collect()
        }))
    }

    async fn highest_for_listing(
        &self,
        listing_id: ListingId,
    ) -> Result<Option<Bid>, CatalogError> {
        let bids = BidRepository::list_by_listing(self, listing_id).await?;
        Ok(crate::domain::types::highest_bid(&bids).cloned())
    }
}

impl CommentRepository for MemoryCatalog {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CatalogError> {
        Ok(self.with(|t| t.comments.iter().find(|c| c.id == id).cloned()))
    }

    async fn create(&self, comment: &Comment) -> Result<(), CatalogError> {
        self.with(|t| t.comments.push(comment.clone()));
        Ok(())
    }

    async fn delete(&self, id: CommentId) -> Result<bool, CatalogError> {
        Ok(self.with(|t| {
            let before = t.comments.len();
            t.comments.retain(|c| c.id != id);
            t.comments.len() < before
        }))
    }

    async fn list_by_listing(&self, listing_id: ListingId) -> Result<Vec<Comment>, CatalogError> {
        Ok(self.with(|t| {
            t.comments
                .iter()
                .filter(|c| c.listing_id == listing_id)
                .cloned()
                .collect()
        }))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Comment>, CatalogError> {
        Ok(self.with(|t| {
            t.comments
                .iter()
                .filter(|c| c.user_id == user_id)
                .cloned()
                .collect()
        }))
    }
}

impl WishlistRepository for MemoryCatalog {
    async fn add(&self, user_id: UserId, listing_id: ListingId) -> Result<bool, CatalogError> {
        Ok(self.with(|t| {
            if t.wishlist.contains(&(user_id, listing_id)) {
                return false;
            }
            t.wishlist.push((user_id, listing_id));
            true
        }))
    }

    async fn remove(&self, user_id: UserId, listing_id: ListingId) -> Result<bool, CatalogError> {
        Ok(self.with(|t| {
            let before = t.wishlist.len();
            t.wishlist.retain(|entry| *entry != (user_id, listing_id));
            t.wishlist.len() < before
        }))
    }

    async fn contains(&self, user_id: UserId, listing_id: ListingId) -> Result<bool, CatalogError> {
        Ok(self.with(|t| t.wishlist.contains(&(user_id, listing_id))))
    }

    async fn list_listings(&self, user_id: UserId) -> Result<Vec<AuctionListing>, CatalogError> {
        Ok(self.with(|t| {
            t.listings
                .iter()
                .filter(|l| t.wishlist.contains(&(user_id, l.id)))
                .cloned()
                .collect()
        }))
    }

    async fn list_users(&self, listing_id: ListingId) -> Result<Vec<UserId>, CatalogError> {
        Ok(self.with(|t| {
            t.wishlist
                .iter()
                .filter(|(_, l)| *l == listing_id)
                .map(|(u, _)| *u)
                .collect()
        }))
    }
}
