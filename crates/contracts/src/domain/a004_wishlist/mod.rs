pub mod aggregate;

pub use aggregate::{ProductCategory, WishlistItem};
