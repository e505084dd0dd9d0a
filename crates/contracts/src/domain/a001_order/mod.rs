pub mod aggregate;

pub use aggregate::{Order, OrderStatus, PaymentStatus};
