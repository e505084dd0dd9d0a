pub mod a001_order;
pub mod a002_customer;
pub mod a003_abandoned_cart;
pub mod a004_wishlist;
pub mod a005_return_request;
pub mod a006_distributor;
pub mod a007_inquiry;
