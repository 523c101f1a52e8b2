//! Router for the reference API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::Path,
    routing::get,
};
use axum_extra::extract::Query;
use chrono::Local;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::records::Gender;
use crate::reference::articles::{CATEGORIES, articles_in};
use crate::reference::emergency::{self, EMERGENCY_CONTACTS, EmergencyCard};
use crate::reference::growth::{chart, percentile_band};
use crate::reference::nutrition::{FEEDING_SCHEDULE, MEAL_SUGGESTIONS, age_category};
use crate::reference::wellness::{MINDFULNESS_EXERCISES, affirmation_for};

type SharedState = Arc<RwLock<AppState>>;

/// List emergency cards, optionally narrowed to one category
async fn emergency_cards(
    Query(params): Query<public::EmergencyQuery>,
) -> Json<public::EmergencyResponse> {
    Json(public::EmergencyResponse {
        cards: emergency::cards(params.category),
        contacts: EMERGENCY_CONTACTS,
    })
}

async fn emergency_card(Path(id): Path<String>) -> Result<Json<&'static EmergencyCard>, ApiError> {
    emergency::find_card(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Emergency card"))
}

async fn articles(Query(params): Query<public::ArticlesQuery>) -> Json<public::ArticlesResponse> {
    Json(public::ArticlesResponse {
        categories: CATEGORIES,
        articles: articles_in(params.category.as_deref()),
    })
}

async fn nutrition(Query(params): Query<public::NutritionQuery>) -> Json<public::NutritionResponse> {
    let today = Local::now().date_naive();
    let age_category = params.birth_date.map(|birth| age_category(birth, today));
    let meal_suggestions = match age_category {
        Some(category) => vec![category.meal_suggestion()],
        None => MEAL_SUGGESTIONS.iter().collect(),
    };

    Json(public::NutritionResponse {
        age_category,
        meal_suggestions,
        feeding_schedule: FEEDING_SCHEDULE,
    })
}

async fn wellness(Query(params): Query<public::WellnessQuery>) -> Json<public::WellnessResponse> {
    let date = params.date.unwrap_or_else(|| Local::now().date_naive());
    Json(public::WellnessResponse {
        date,
        affirmation: affirmation_for(date),
        exercises: MINDFULNESS_EXERCISES,
    })
}

/// Place a single measurement on the WHO chart
async fn growth_percentile(
    Query(params): Query<public::PercentileQuery>,
) -> Json<public::PercentileResponse> {
    let male = params.gender == Gender::Male;
    Json(public::PercentileResponse {
        band: percentile_band(params.value, chart(params.measure, male), params.month),
    })
}

/// Create the reference router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/emergency", get(emergency_cards))
        .route("/emergency/{id}", get(emergency_card))
        .route("/articles", get(articles))
        .route("/nutrition", get(nutrition))
        .route("/wellness", get(wellness))
        .route("/growth/percentile", get(growth_percentile))
}
