pub mod api_message;
pub mod sort_direction;

pub use api_message::ApiMessage;
pub use sort_direction::SortDirection;
