mod helpers;

mod closing_test;
mod wishlist_test;
