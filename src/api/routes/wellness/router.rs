//! Router for the parent wellness API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::records::db::{insert_wellness_record, list_wellness_records};
use crate::records::summary::weekly_wellness;

type SharedState = Arc<RwLock<AppState>>;

async fn entries(
    State(state): State<SharedState>,
) -> Result<Json<Vec<public::WellnessRecord>>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    Ok(Json(list_wellness_records(&db).await?))
}

async fn create_entry(
    State(state): State<SharedState>,
    Json(payload): Json<public::NewWellnessRecord>,
) -> Result<(StatusCode, Json<public::WellnessRecord>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;
    let db = state.read().expect("Unable to read share state").db.clone();
    let entry = insert_wellness_record(&db, payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Averages over the last seven entries
async fn weekly_summary(
    State(state): State<SharedState>,
) -> Result<Json<public::WeeklyWellnessResponse>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    let entries = list_wellness_records(&db).await?;
    Ok(Json(public::WeeklyWellnessResponse {
        summary: weekly_wellness(&entries),
    }))
}

/// Create the wellness router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(entries).post(create_entry))
        .route("/summary", get(weekly_summary))
}
