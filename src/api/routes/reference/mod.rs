//! Read-only guides and charts
pub mod public;
mod router;

pub use router::router;
