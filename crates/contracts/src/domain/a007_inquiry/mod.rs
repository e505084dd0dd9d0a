pub mod aggregate;

pub use aggregate::{Inquiry, InquiryCategory, InquiryStatus};
