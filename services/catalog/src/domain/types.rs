use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use auctions_domain::id::{BidId, CategoryId, CommentId, ListingId, UserId};
use auctions_domain::money;
use auctions_domain::validation::{self, ValidationError};

pub const USERNAME_MAX_LEN: usize = 150;
pub const EMAIL_MAX_LEN: usize = 254;
pub const CATEGORY_CODE_MAX_LEN: usize = 5;
pub const CATEGORY_NAME_MAX_LEN: usize = 50;
pub const LISTING_TITLE_MAX_LEN: usize = 255;
pub const LISTING_DESCRIPTION_MAX_LEN: usize = 2000;
pub const COMMENT_CONTENT_MAX_LEN: usize = 1000;

/// Display label for a collection of categories.
pub const CATEGORY_PLURAL_LABEL: &str = "Categories";

const COMMENT_PREVIEW_CHARS: usize = 20;

/// Account identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

/// Listing classification, ordered by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub code: String,
    pub name: String,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An item offered for sale by bidding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionListing {
    pub id: ListingId,
    pub title: String,
    pub description: Option<String>,
    pub starting_bid: Decimal,
    pub image: Option<String>,
    pub is_active: bool,
    /// The seller.
    pub user_id: UserId,
    pub category_id: Option<CategoryId>,
    /// Bid that finalized the auction, if it has been closed with one.
    pub closing_bid_id: Option<BidId>,
    pub created_at: DateTime<Utc>,
}

impl AuctionListing {
    /// Highest amount among this listing's bids, or the starting bid when
    /// none of `bids` belong to it.
    pub fn current_price<'a>(&self, bids: impl IntoIterator<Item = &'a Bid>) -> Decimal {
        current_price(
            self.starting_bid,
            bids.into_iter()
                .filter(|bid| bid.listing_id == self.id)
                .map(|bid| bid.amount),
        )
    }
}

impl fmt::Display for AuctionListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// A monetary offer on a listing. `user_id` is `None` once the bidder is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bid {
    pub id: BidId,
    pub listing_id: ListingId,
    pub user_id: Option<UserId>,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.user_id {
            Some(user_id) => write!(f, "{user_id} - {}", self.amount),
            None => write!(f, "None - {}", self.amount),
        }
    }
}

/// Free-text annotation on a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub listing_id: ListingId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// First characters of the content, for list displays.
    pub fn preview(&self) -> String {
        self.content.chars().take(COMMENT_PREVIEW_CHARS).collect()
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.listing_id,
            self.user_id,
            self.preview()
        )
    }
}

/// Current price rule: the maximum bid amount, falling back to the starting bid.
pub fn current_price(starting_bid: Decimal, amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().max().unwrap_or(starting_bid)
}

/// Highest bid by amount; the earliest one wins a tie.
pub fn highest_bid<'a>(bids: impl IntoIterator<Item = &'a Bid>) -> Option<&'a Bid> {
    bids.into_iter().max_by(|a, b| {
        a.amount
            .cmp(&b.amount)
            .then_with(|| b.created_at.cmp(&a.created_at))
    })
}

// ── Create inputs ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
}

impl NewUser {
    pub fn validated(self) -> Result<Self, ValidationError> {
        validation::required_text("username", &self.username, USERNAME_MAX_LEN)?;
        let email = validation::non_blank(self.email);
        if let Some(ref email) = email {
            validation::max_chars("email", email, EMAIL_MAX_LEN)?;
        }
        Ok(Self {
            username: self.username,
            email,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub code: String,
    pub name: String,
}

impl NewCategory {
    pub fn validated(self) -> Result<Self, ValidationError> {
        validation::required_text("code", &self.code, CATEGORY_CODE_MAX_LEN)?;
        validation::required_text("name", &self.name, CATEGORY_NAME_MAX_LEN)?;
        Ok(self)
    }
}

#[derive(Debug, Clone)]
pub struct NewListing {
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub starting_bid: Decimal,
    pub image: Option<String>,
    pub category_id: Option<CategoryId>,
}

impl NewListing {
    /// Listing with a zero starting bid and no optional fields set.
    pub fn new(user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            description: None,
            starting_bid: Decimal::ZERO,
            image: None,
            category_id: None,
        }
    }

    pub fn validated(self) -> Result<Self, ValidationError> {
        validation::required_text("title", &self.title, LISTING_TITLE_MAX_LEN)?;
        let description = validation::non_blank(self.description);
        if let Some(ref description) = description {
            validation::max_chars("description", description, LISTING_DESCRIPTION_MAX_LEN)?;
        }
        let starting_bid = money::non_negative_amount("starting_bid", self.starting_bid)?;
        let image = validation::non_blank(self.image);
        if let Some(ref image) = image {
            validation::http_url("image", image)?;
        }
        Ok(Self {
            user_id: self.user_id,
            title: self.title,
            description,
            starting_bid,
            image,
            category_id: self.category_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewBid {
    pub listing_id: ListingId,
    pub user_id: Option<UserId>,
    pub amount: Decimal,
}

impl NewBid {
    pub fn validated(self) -> Result<Self, ValidationError> {
        let amount = money::amount("amount", self.amount)?;
        Ok(Self { amount, ..self })
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub listing_id: ListingId,
    pub user_id: UserId,
    pub content: String,
}

impl NewComment {
    pub fn validated(self) -> Result<Self, ValidationError> {
        validation::required_text("content", &self.content, COMMENT_CONTENT_MAX_LEN)?;
        Ok(self)
    }
}

// ── Listing update ───────────────────────────────────────────────────────────

/// Partial update of a listing's own fields. Outer `None` leaves a field as is;
/// `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default)]
pub struct ListingUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub category_id: Option<Option<CategoryId>>,
    pub is_active: Option<bool>,
}

impl ListingUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.category_id.is_none()
            && self.is_active.is_none()
    }

    pub fn validated(self) -> Result<Self, ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::NothingToUpdate);
        }
        if let Some(ref title) = self.title {
            validation::required_text("title", title, LISTING_TITLE_MAX_LEN)?;
        }
        let description = self.description.map(validation::non_blank);
        if let Some(Some(ref description)) = description {
            validation::max_chars("description", description, LISTING_DESCRIPTION_MAX_LEN)?;
        }
        let image = self.image.map(validation::non_blank);
        if let Some(Some(ref image)) = image {
            validation::http_url("image", image)?;
        }
        Ok(Self {
            title: self.title,
            description,
            image,
            category_id: self.category_id,
            is_active: self.is_active,
        })
    }

    /// Write the set fields onto `listing`. Owner, price, and timestamps are untouched.
    pub fn apply(self, listing: &mut AuctionListing) {
        if let Some(title) = self.title {
            listing.title = title;
        }
        if let Some(description) = self.description {
            listing.description = description;
        }
        if let Some(image) = self.image {
            listing.image = image;
        }
        if let Some(category_id) = self.category_id {
            listing.category_id = category_id;
        }
        if let Some(is_active) = self.is_active {
            listing.is_active = is_active;
        }
    }
}
