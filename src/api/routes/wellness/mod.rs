//! Parent wellness journal
pub mod public;
mod router;

pub use router::router;
