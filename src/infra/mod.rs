//! Infrastructure adapters and runtime bootstrap.

pub mod error;
mod lock;
pub mod memory;
pub mod seed;
pub mod shell;
pub mod telemetry;
