//! Router for the babies API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::Local;
use tokio_rusqlite::Connection;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::records::db::{
    find_baby, insert_baby, insert_cry_record, insert_growth_record, insert_nutrition_record,
    insert_sleep_record, list_babies, list_cry_records, list_growth_records,
    list_nutrition_records, list_sleep_records,
};
use crate::records::summary::{
    baseline_insights, growth_summary, meal_stats, sleep_summary,
};
use crate::reference::nutrition::age_category;

type SharedState = Arc<RwLock<AppState>>;

fn db(state: &SharedState) -> Connection {
    state.read().expect("Unable to read share state").db.clone()
}

async fn require_baby(db: &Connection, id: &str) -> Result<public::Baby, ApiError> {
    find_baby(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Baby"))
}

async fn babies(State(state): State<SharedState>) -> Result<Json<Vec<public::Baby>>, ApiError> {
    Ok(Json(list_babies(&db(&state)).await?))
}

async fn create_baby(
    State(state): State<SharedState>,
    Json(payload): Json<public::NewBaby>,
) -> Result<(StatusCode, Json<public::Baby>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;
    let baby = insert_baby(&db(&state), payload).await?;
    Ok((StatusCode::CREATED, Json(baby)))
}

async fn baby(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<public::Baby>, ApiError> {
    Ok(Json(require_baby(&db(&state), &id).await?))
}

async fn growth_records(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<public::GrowthRecord>>, ApiError> {
    let db = db(&state);
    require_baby(&db, &id).await?;
    Ok(Json(list_growth_records(&db, &id).await?))
}

async fn create_growth_record(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<public::NewGrowthRecord>,
) -> Result<(StatusCode, Json<public::GrowthRecord>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;
    let db = db(&state);
    require_baby(&db, &id).await?;
    let record = insert_growth_record(&db, &id, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Percentile bands for the latest measurement
async fn growth_record_summary(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<public::SummaryResponse<public::GrowthSummary>>, ApiError> {
    let db = db(&state);
    let baby = require_baby(&db, &id).await?;
    let records = list_growth_records(&db, &id).await?;
    let summary = growth_summary(&baby, &records, Local::now().date_naive());
    Ok(Json(public::SummaryResponse { summary }))
}

async fn sleep_records(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<public::SleepRecord>>, ApiError> {
    let db = db(&state);
    require_baby(&db, &id).await?;
    Ok(Json(list_sleep_records(&db, &id).await?))
}

async fn create_sleep_record(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<public::NewSleepRecord>,
) -> Result<(StatusCode, Json<public::SleepRecord>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;
    let db = db(&state);
    require_baby(&db, &id).await?;
    let record = insert_sleep_record(&db, &id, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn sleep_record_summary(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<public::SummaryResponse<public::SleepSummary>>, ApiError> {
    let db = db(&state);
    require_baby(&db, &id).await?;
    let records = list_sleep_records(&db, &id).await?;
    Ok(Json(public::SummaryResponse {
        summary: sleep_summary(&records),
    }))
}

async fn cry_records(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<public::CryRecord>>, ApiError> {
    let db = db(&state);
    require_baby(&db, &id).await?;
    Ok(Json(list_cry_records(&db, &id).await?))
}

async fn create_cry_record(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<public::NewCryRecord>,
) -> Result<(StatusCode, Json<public::CryRecord>), ApiError> {
    let db = db(&state);
    require_baby(&db, &id).await?;
    let record = insert_cry_record(&db, &id, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn meals(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<public::NutritionRecord>>, ApiError> {
    let db = db(&state);
    require_baby(&db, &id).await?;
    Ok(Json(list_nutrition_records(&db, &id).await?))
}

async fn create_meal(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<public::NewNutritionRecord>,
) -> Result<(StatusCode, Json<public::NutritionRecord>), ApiError> {
    let db = db(&state);
    require_baby(&db, &id).await?;
    let record = insert_nutrition_record(&db, &id, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Today's feeding counts and what to offer at the baby's age
async fn meals_summary(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<public::MealsSummaryResponse>, ApiError> {
    let db = db(&state);
    let baby = require_baby(&db, &id).await?;
    let records = list_nutrition_records(&db, &id).await?;
    let today = Local::now().date_naive();
    let category = age_category(baby.birth_date, today);
    Ok(Json(public::MealsSummaryResponse {
        today: meal_stats(&records, today),
        age_category: category,
        suggestion: category.meal_suggestion(),
    }))
}

async fn insights(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<public::InsightsResponse>, ApiError> {
    let baby = require_baby(&db(&state), &id).await?;
    Ok(Json(public::InsightsResponse {
        insights: baseline_insights(&baby, Local::now().date_naive()),
    }))
}

/// Create the babies router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(babies).post(create_baby))
        .route("/{id}", get(baby))
        .route("/{id}/growth", get(growth_records).post(create_growth_record))
        .route("/{id}/growth/summary", get(growth_record_summary))
        .route("/{id}/sleep", get(sleep_records).post(create_sleep_record))
        .route("/{id}/sleep/summary", get(sleep_record_summary))
        .route("/{id}/cries", get(cry_records).post(create_cry_record))
        .route("/{id}/meals", get(meals).post(create_meal))
        .route("/{id}/meals/summary", get(meals_summary))
        .route("/{id}/insights", get(insights))
}
