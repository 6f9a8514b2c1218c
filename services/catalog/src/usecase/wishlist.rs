use tracing::info;

use auctions_domain::id::{ListingId, UserId};

use crate::domain::repository::{ListingRepository, UserRepository, WishlistRepository};
use crate::error::CatalogError;

// ── AddToWishlist ────────────────────────────────────────────────────────────

/// Put a listing on a user's wishlist. Returns `false` when it was already there.
pub struct AddToWishlistUseCase<W: WishlistRepository, U: UserRepository, L: ListingRepository> {
    pub repo: W,
    pub users: U,
    pub listings: L,
}

impl<W, U, L> AddToWishlistUseCase<W, U, L>
where
    W: WishlistRepository,
    U: UserRepository,
    L: ListingRepository,
{
    pub async fn execute(
        &self,
        user_id: UserId,
        listing_id: ListingId,
    ) -> Result<bool, CatalogError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(CatalogError::UserNotFound)?;
        self.listings
            .find_by_id(listing_id)
            .await?
            .ok_or(CatalogError::ListingNotFound)?;
        let added = self.repo.add(user_id, listing_id).await?;
        if added {
            info!(%user_id, %listing_id, "wishlist item added");
        }
        Ok(added)
    }
}

// ── RemoveFromWishlist ───────────────────────────────────────────────────────

/// Take a listing off a user's wishlist. Returns `false` when it was not there.
pub struct RemoveFromWishlistUseCase<W: WishlistRepository> {
    pub repo: W,
}

impl<W: WishlistRepository> RemoveFromWishlistUseCase<W> {
    pub async fn execute(
        &self,
        user_id: UserId,
        listing_id: ListingId,
    ) -> Result<bool, CatalogError> {
        let removed = self.repo.remove(user_id, listing_id).await?;
        if removed {
            info!(%user_id, %listing_id, "wishlist item removed");
        }
        Ok(removed)
    }
}
