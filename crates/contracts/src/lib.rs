//! Wire types shared between the admin dashboard and the backend REST API.

pub mod domain;
pub mod shared;
