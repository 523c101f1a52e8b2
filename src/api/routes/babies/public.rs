//! Public types for the babies API
use serde::Serialize;

pub use crate::records::summary::{GrowthSummary, Insight, MealStats, SleepSummary};
pub use crate::records::{
    Baby, CryRecord, GrowthRecord, NewBaby, NewCryRecord, NewGrowthRecord, NewNutritionRecord,
    NewSleepRecord, NutritionRecord, SleepRecord,
};
use crate::reference::nutrition::{AgeCategory, MealSuggestion};

/// A derived summary, `null` until there is enough data
#[derive(Serialize)]
pub struct SummaryResponse<T> {
    pub summary: Option<T>,
}

#[derive(Serialize)]
pub struct MealsSummaryResponse {
    pub today: MealStats,
    pub age_category: AgeCategory,
    pub suggestion: &'static MealSuggestion,
}

#[derive(Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<Insight>,
}
