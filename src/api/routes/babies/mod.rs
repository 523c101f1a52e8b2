//! Baby profiles and their logs
pub mod public;
mod router;

pub use router::router;
