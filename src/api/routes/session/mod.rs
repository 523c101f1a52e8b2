//! Signed-in user
pub mod public;
mod router;

pub use router::router;
