use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use auctions_domain::id::{BidId, CategoryId, ListingId};
use auctions_domain::validation::ValidationError;

use crate::domain::repository::{
    BidRepository, CategoryRepository, ListingRepository, UserRepository,
};
use crate::domain::types::{AuctionListing, ListingUpdate, NewListing};
use crate::error::CatalogError;

async fn ensure_category<C: CategoryRepository>(
    categories: &C,
    category_id: Option<CategoryId>,
) -> Result<(), CatalogError> {
    if let Some(id) = category_id {
        categories
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::CategoryNotFound)?;
    }
    Ok(())
}

async fn find_listing<L: ListingRepository>(
    listings: &L,
    listing_id: ListingId,
) -> Result<AuctionListing, CatalogError> {
    listings
        .find_by_id(listing_id)
        .await?
        .ok_or(CatalogError::ListingNotFound)
}

// ── CreateListing ────────────────────────────────────────────────────────────

pub struct CreateListingUseCase<L: ListingRepository, U: UserRepository, C: CategoryRepository> {
    pub repo: L,
    pub users: U,
    pub categories: C,
}

impl<L, U, C> CreateListingUseCase<L, U, C>
where
    L: ListingRepository,
    U: UserRepository,
    C: CategoryRepository,
{
    pub async fn execute(&self, input: NewListing) -> Result<AuctionListing, CatalogError> {
        let input = input.validated()?;
        self.users
            .find_by_id(input.user_id)
            .await?
            .ok_or(CatalogError::UserNotFound)?;
        ensure_category(&self.categories, input.category_id).await?;

        let listing = AuctionListing {
            id: ListingId::new(),
            title: input.title,
            description: input.description,
            starting_bid: input.starting_bid,
            image: input.image,
            is_active: true,
            user_id: input.user_id,
            category_id: input.category_id,
            closing_bid_id: None,
            created_at: Utc::now(),
        };
        self.repo.create(&listing).await?;
        info!(listing_id = %listing.id, user_id = %listing.user_id, "listing created");
        Ok(listing)
    }
}

// ── UpdateListing ────────────────────────────────────────────────────────────

pub struct UpdateListingUseCase<L: ListingRepository, C: CategoryRepository> {
    pub repo: L,
    pub categories: C,
}

impl<L: ListingRepository, C: CategoryRepository> UpdateListingUseCase<L, C> {
    pub async fn execute(
        &self,
        listing_id: ListingId,
        update: ListingUpdate,
    ) -> Result<AuctionListing, CatalogError> {
        let update = update.validated()?;
        let mut listing = find_listing(&self.repo, listing_id).await?;
        if let Some(category_id) = update.category_id {
            ensure_category(&self.categories, category_id).await?;
        }
        update.apply(&mut listing);
        self.repo.update(&listing).await?;
        info!(%listing_id, "listing updated");
        Ok(listing)
    }
}

// ── DeleteListing ────────────────────────────────────────────────────────────

pub struct DeleteListingUseCase<L: ListingRepository> {
    pub repo: L,
}

impl<L: ListingRepository> DeleteListingUseCase<L> {
    pub async fn execute(&self, listing_id: ListingId) -> Result<(), CatalogError> {
        let deleted = self.repo.delete(listing_id).await?;
        if !deleted {
            return Err(CatalogError::ListingNotFound);
        }
        info!(%listing_id, "listing deleted");
        Ok(())
    }
}

// ── GetCurrentPrice ──────────────────────────────────────────────────────────

/// Highest bid amount on a listing, or its starting bid while it has none.
pub struct GetCurrentPriceUseCase<L: ListingRepository, B: BidRepository> {
    pub repo: L,
    pub bids: B,
}

impl<L: ListingRepository, B: BidRepository> GetCurrentPriceUseCase<L, B> {
    pub async fn execute(&self, listing_id: ListingId) -> Result<Decimal, CatalogError> {
        let listing = find_listing(&self.repo, listing_id).await?;
        let bids = self.bids.list_by_listing(listing_id).await?;
        Ok(listing.current_price(&bids))
    }
}

// ── CloseListing ─────────────────────────────────────────────────────────────

/// Deactivate a listing and record its highest bid as the closing bid.
/// A listing that is already inactive is returned unchanged.
pub struct CloseListingUseCase<L: ListingRepository, B: BidRepository> {
    pub repo: L,
    pub bids: B,
}

impl<L: ListingRepository, B: BidRepository> CloseListingUseCase<L, B> {
    pub async fn execute(&self, listing_id: ListingId) -> Result<AuctionListing, CatalogError> {
        let mut listing = find_listing(&self.repo, listing_id).await?;
        if !listing.is_active {
            return Ok(listing);
        }
        let highest = self.bids.highest_for_listing(listing_id).await?;
        listing.is_active = false;
        listing.closing_bid_id = highest.map(|bid| bid.id);
        self.repo.update(&listing).await?;
        info!(
            %listing_id,
            closing_bid_id = ?listing.closing_bid_id,
            "listing closed"
        );
        Ok(listing)
    }
}

// ── SetClosingBid ────────────────────────────────────────────────────────────

pub struct SetClosingBidUseCase<L: ListingRepository, B: BidRepository> {
    pub repo: L,
    pub bids: B,
}

impl<L: ListingRepository, B: BidRepository> SetClosingBidUseCase<L, B> {
    pub async fn execute(
        &self,
        listing_id: ListingId,
        bid_id: BidId,
    ) -> Result<AuctionListing, CatalogError> {
        let mut listing = find_listing(&self.repo, listing_id).await?;
        let bid = self
            .bids
            .find_by_id(bid_id)
            .await?
            .ok_or(CatalogError::BidNotFound)?;
        if bid.listing_id != listing_id {
            return Err(ValidationError::ClosingBidMismatch.into());
        }
        listing.is_active = false;
        listing.closing_bid_id = Some(bid.id);
        self.repo.update(&listing).await?;
        info!(%listing_id, %bid_id, "closing bid set");
        Ok(listing)
    }
}
