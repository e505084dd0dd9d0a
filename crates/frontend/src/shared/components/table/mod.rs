pub mod number_format;
pub mod sortable_header_cell;

pub use number_format::{format_int, format_money};
pub use sortable_header_cell::SortableHeaderCell;
