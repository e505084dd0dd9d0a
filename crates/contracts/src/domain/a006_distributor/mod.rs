pub mod aggregate;

pub use aggregate::{Distributor, DistributorStatus};
