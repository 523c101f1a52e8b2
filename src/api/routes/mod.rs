//! API routes module

pub mod babies;
pub mod chat;
pub mod reference;
pub mod session;
pub mod wellness;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // SnugBot chat proxy
        .nest("/chat", chat::router())
        // Static guides and charts
        .nest("/reference", reference::router())
        // Baby profiles and their logs
        .nest("/babies", babies::router())
        .nest("/wellness", wellness::router())
        .nest("/session", session::router())
}
