use chrono::Utc;
use tracing::info;

use auctions_domain::id::BidId;

use crate::domain::repository::{BidRepository, ListingRepository, UserRepository};
use crate::domain::types::{Bid, NewBid};
use crate::error::CatalogError;

// ── PlaceBid ─────────────────────────────────────────────────────────────────

/// Record a bid. Amounts are not compared against the current price and
/// inactive listings still accept bids; arbitration belongs to the caller.
pub struct PlaceBidUseCase<B: BidRepository, L: ListingRepository, U: UserRepository> {
    pub repo: B,
    pub listings: L,
    pub users: U,
}

impl<B, L, U> PlaceBidUseCase<B, L, U>
where
    B: BidRepository,
    L: ListingRepository,
    U: UserRepository,
{
    pub async fn execute(&self, input: NewBid) -> Result<Bid, CatalogError> {
        let input = input.validated()?;
        self.listings
            .find_by_id(input.listing_id)
            .await?
            .ok_or(CatalogError::ListingNotFound)?;
        if let Some(user_id) = input.user_id {
            self.users
                .find_by_id(user_id)
                .await?
                .ok_or(CatalogError::UserNotFound)?;
        }

        let bid = Bid {
            id: BidId::new(),
            listing_id: input.listing_id,
            user_id: input.user_id,
            amount: input.amount,
            created_at: Utc::now(),
        };
        self.repo.create(&bid).await?;
        info!(
            bid_id = %bid.id,
            listing_id = %bid.listing_id,
            amount = %bid.amount,
            "bid placed"
        );
        Ok(bid)
    }
}

// ── DeleteBid ────────────────────────────────────────────────────────────────

pub struct DeleteBidUseCase<B: BidRepository> {
    pub repo: B,
}

impl<B: BidRepository> DeleteBidUseCase<B> {
    pub async fn execute(&self, bid_id: BidId) -> Result<(), CatalogError> {
        let deleted = self.repo.delete(bid_id).await?;
        if !deleted {
            return Err(CatalogError::BidNotFound);
        }
        info!(%bid_id, "bid deleted");
        Ok(())
    }
}
