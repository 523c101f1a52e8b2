//! SnugBot chat proxy
pub mod public;
mod router;

pub use router::router;
