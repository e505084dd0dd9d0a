pub mod notifications;
pub mod pagination_controls;
pub mod table;
pub mod ui;

pub use notifications::NoticeStack;
pub use pagination_controls::PaginationControls;
