//! Blog post desk: a filtered post list and a create/edit form over an observable post store.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
