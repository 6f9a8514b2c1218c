#![allow(async_fn_in_trait)]

use auctions_domain::id::{BidId, CategoryId, CommentId, ListingId, UserId};

use crate::domain::types::{AuctionListing, Bid, Category, Comment, User};
use crate::error::CatalogError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, CatalogError>;
    /// Fails with `UsernameTaken` when the username is in use.
    async fn create(&self, user: &User) -> Result<(), CatalogError>;
    /// Delete a user. Their listings, comments, and wishlist rows go with them;
    /// their bids stay with the bidder cleared. Returns `true` if a row was deleted.
    async fn delete(&self, id: UserId) -> Result<bool, CatalogError>;
}

/// Repository for listing categories.
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CatalogError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<Category>, CatalogError>;
    /// All categories ordered by name ascending.
    async fn list(&self) -> Result<Vec<Category>, CatalogError>;
    /// Fails with `CategoryCodeTaken` when the code is in use.
    async fn create(&self, category: &Category) -> Result<(), CatalogError>;
    /// Delete a category; its listings stay with the category cleared.
    async fn delete(&self, id: CategoryId) -> Result<bool, CatalogError>;
}

/// Repository for auction listings.
pub trait ListingRepository: Send + Sync {
    async fn find_by_id(&self, id: ListingId) -> Result<Option<AuctionListing>, CatalogError>;
    async fn create(&self, listing: &AuctionListing) -> Result<(), CatalogError>;
    /// Persist the mutable fields (title, description, image, category,
    /// active flag, closing bid). Owner, starting bid, and `created_at` are kept.
    async fn update(&self, listing: &AuctionListing) -> Result<(), CatalogError>;
    /// Delete a listing together with its bids, comments, and wishlist rows.
    async fn delete(&self, id: ListingId) -> Result<bool, CatalogError>;
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<AuctionListing>, CatalogError>;
    async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<AuctionListing>, CatalogError>;
    async fn list_active(&self) -> Result<Vec<AuctionListing>, CatalogError>;
}

/// Repository for bids.
pub trait BidRepository: Send + Sync {
    async fn find_by_id(&self, id: BidId) -> Result<Option<Bid>, CatalogError>;
    async fn create(&self, bid: &Bid) -> Result<(), CatalogError>;
    /// Delete a bid; a listing closed with it keeps no closing bid.
    async fn delete(&self, id: BidId) -> Result<bool, CatalogError>;
    async fn list_by_listing(&self, listing_id: ListingId) -> Result<Vec<Bid>, CatalogError>;
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Bid>, CatalogError>;
    /// Bid with the largest amount on a listing; the earliest one on ties.
    async fn highest_for_listing(&self, listing_id: ListingId)
    -> Result<Option<Bid>, CatalogError>;
}

/// Repository for listing comments.
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CatalogError>;
    async fn create(&self, comment: &Comment) -> Result<(), CatalogError>;
    async fn delete(&self, id: CommentId) -> Result<bool, CatalogError>;
    async fn list_by_listing(&self, listing_id: ListingId)
    -> Result<Vec<Comment>, CatalogError>;
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Comment>, CatalogError>;
}

/// Repository for the user ↔ listing wishlist relation.
pub trait WishlistRepository: Send + Sync {
    /// Returns `true` if the listing was not already on the wishlist.
    async fn add(&self, user_id: UserId, listing_id: ListingId) -> Result<bool, CatalogError>;
    /// Returns `true` if a row was deleted.
    async fn remove(&self, user_id: UserId, listing_id: ListingId) -> Result<bool, CatalogError>;
    async fn contains(&self, user_id: UserId, listing_id: ListingId)
    -> Result<bool, CatalogError>;
    async fn list_listings(&self, user_id: UserId) -> Result<Vec<AuctionListing>, CatalogError>;
    /// Users who have the listing on their wishlist.
    async fn list_users(&self, listing_id: ListingId) -> Result<Vec<UserId>, CatalogError>;
}
