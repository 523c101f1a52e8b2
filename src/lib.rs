pub mod api;
pub mod chat;
pub mod cli;
pub mod core;
pub mod records;
pub mod reference;
pub mod session;
