//! Application services: list and form controllers over the store and UI ports.

pub mod error;
pub mod posts;
pub mod store;
pub mod ui;
