pub mod aggregate;

pub use aggregate::{ReturnRequest, ReturnStatus};
