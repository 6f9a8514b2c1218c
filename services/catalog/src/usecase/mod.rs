pub mod bid;
pub mod category;
pub mod comment;
pub mod listing;
pub mod user;
pub mod wishlist;

#[cfg(test)]
mod mock;
