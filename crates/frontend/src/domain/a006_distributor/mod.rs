pub mod record;
pub mod ui;
