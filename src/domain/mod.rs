//! Domain layer types and invariants.

pub mod categories;
pub mod entities;
pub mod error;
pub mod filter;
pub mod form;
pub mod ids;
pub mod images;
