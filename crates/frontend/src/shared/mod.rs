pub mod api_client;
pub mod api_utils;
pub mod collection_page;
pub mod collection_view;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_utils;
