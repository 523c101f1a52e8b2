//! Public types for the reference API
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::Gender;
use crate::reference::articles::Article;
use crate::reference::emergency::{EmergencyCard, EmergencyContact, Severity};
use crate::reference::growth::{Measure, PercentileBand};
use crate::reference::nutrition::{AgeCategory, FeedingGuideline, MealSuggestion};
use crate::reference::wellness::MindfulnessExercise;

#[derive(Deserialize)]
pub struct EmergencyQuery {
    pub category: Option<Severity>,
}

#[derive(Serialize)]
pub struct EmergencyResponse {
    pub cards: Vec<&'static EmergencyCard>,
    pub contacts: &'static [EmergencyContact],
}

#[derive(Deserialize)]
pub struct ArticlesQuery {
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct ArticlesResponse {
    pub categories: &'static [&'static str],
    pub articles: Vec<&'static Article>,
}

#[derive(Deserialize)]
pub struct NutritionQuery {
    /// Narrows suggestions to the baby's age when given
    pub birth_date: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct NutritionResponse {
    pub age_category: Option<AgeCategory>,
    pub meal_suggestions: Vec<&'static MealSuggestion>,
    pub feeding_schedule: &'static [FeedingGuideline],
}

#[derive(Deserialize)]
pub struct WellnessQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct WellnessResponse {
    pub date: NaiveDate,
    pub affirmation: &'static str,
    pub exercises: &'static [MindfulnessExercise],
}

#[derive(Deserialize)]
pub struct PercentileQuery {
    pub measure: Measure,
    pub gender: Gender,
    pub month: i32,
    pub value: f64,
}

#[derive(Serialize, Deserialize)]
pub struct PercentileResponse {
    pub band: Option<PercentileBand>,
}
