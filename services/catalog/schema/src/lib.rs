//! sea-orm entities for the auction catalog tables.

pub mod auction_listings;
pub mod bids;
pub mod categories;
pub mod comments;
pub mod users;
pub mod wishlist_items;
