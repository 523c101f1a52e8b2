//! Router for the session API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::session::SessionStore;

type SharedState = Arc<RwLock<AppState>>;

fn store(state: &SharedState) -> Arc<SessionStore> {
    state.read().expect("Unable to read share state").session.clone()
}

async fn current(State(state): State<SharedState>) -> Json<public::SessionState> {
    Json(store(&state).state())
}

async fn login(
    State(state): State<SharedState>,
    Json(payload): Json<public::LoginRequest>,
) -> Result<Json<public::SessionState>, ApiError> {
    if payload.email.trim().is_empty() {
        return Err(ApiError::bad_request(anyhow::anyhow!("email must not be blank")));
    }
    let session = store(&state).login(payload.email.trim(), &payload.password)?;
    Ok(Json(session))
}

async fn register(
    State(state): State<SharedState>,
    Json(payload): Json<public::RegisterRequest>,
) -> Result<Json<public::SessionState>, ApiError> {
    if payload.name.trim().is_empty() || payload.email.trim().is_empty() {
        return Err(ApiError::bad_request(anyhow::anyhow!(
            "name and email must not be blank"
        )));
    }
    let session = store(&state).register(
        payload.name.trim(),
        payload.email.trim(),
        &payload.password,
    )?;
    Ok(Json(session))
}

async fn logout(State(state): State<SharedState>) -> Result<Json<public::SessionState>, ApiError> {
    Ok(Json(store(&state).logout()?))
}

/// Create the session router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(current))
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout))
}
