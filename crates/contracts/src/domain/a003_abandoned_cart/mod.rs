pub mod aggregate;

pub use aggregate::{AbandonedCart, CartStatus};
