//! Baby logs and parent wellness entries kept in the local database.
pub mod db;
pub mod summary;

use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use crate::reference::wellness::affirmation_for;

/// Rejected input for a new record.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{0} must not be blank")]
    Blank(&'static str),
    #[error("{field} must be between 1 and 5, got {value}")]
    OutOfScale { field: &'static str, value: u8 },
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error("sleep must end after it starts")]
    EndsBeforeStart,
}

// Enums are stored as their serde names so the database and the API
// agree on spelling.
macro_rules! sql_text_enum {
    ($($name:ty),*) => {
        $(
            impl ToSql for $name {
                fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                    match serde_json::to_value(self) {
                        Ok(Value::String(s)) => Ok(s.into()),
                        Ok(other) => Err(rusqlite::Error::ToSqlConversionFailure(
                            format!("Expected a string, got {}", other).into(),
                        )),
                        Err(e) => Err(rusqlite::Error::ToSqlConversionFailure(Box::new(e))),
                    }
                }
            }

            impl FromSql for $name {
                fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                    serde_json::from_value(Value::String(value.as_str()?.to_string()))
                        .map_err(|e| FromSqlError::Other(Box::new(e)))
                }
            }
        )*
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    PreferNotToSay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SleepQuality {
    pub fn is_restful(&self) -> bool {
        matches!(self, SleepQuality::Good | SleepQuality::Excellent)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CryType {
    Hungry,
    Tired,
    Discomfort,
    Pain,
    #[default]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    BreastMilk,
    Formula,
    SolidFood,
    Snack,
    Water,
}

sql_text_enum!(Gender, SleepQuality, CryType, MealType);

/// Food eaten at a meal. Stored as `{"items": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodItems(pub Vec<String>);

impl FoodItems {
    /// Trims each item and drops the blank ones.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            items
                .into_iter()
                .map(|item| item.as_ref().trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        )
    }

    /// Parses a comma separated list such as "peas, carrots".
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ToSql for FoodItems {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(json!({ "items": self.0 }).to_string().into())
    }
}

impl FromSql for FoodItems {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let parsed: Value =
            serde_json::from_str(value.as_str()?).map_err(|e| FromSqlError::Other(Box::new(e)))?;
        let items = parsed
            .get("items")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self(items))
    }
}

fn non_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(())
}

fn positive(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) if v <= 0.0 || v.is_nan() => Err(ValidationError::NotPositive(field)),
        _ => Ok(()),
    }
}

fn on_scale(field: &'static str, value: Option<u8>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !(1..=5).contains(&v) => Err(ValidationError::OutOfScale { field, value: v }),
        _ => Ok(()),
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Baby {
    pub id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewBaby {
    pub name: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub gender: Gender,
}

impl NewBaby {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_blank("name", &self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GrowthRecord {
    pub id: String,
    pub baby_id: String,
    pub date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub head_circumference_cm: Option<f64>,
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewGrowthRecord {
    pub date: Option<NaiveDate>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub head_circumference_cm: Option<f64>,
    pub notes: Option<String>,
}

impl NewGrowthRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        positive("weight_kg", self.weight_kg)?;
        positive("height_cm", self.height_cm)?;
        positive("head_circumference_cm", self.head_circumference_cm)
    }

    pub fn date_or_today(&self) -> NaiveDate {
        self.date.unwrap_or_else(today)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SleepRecord {
    pub id: String,
    pub baby_id: String,
    pub sleep_start: NaiveDateTime,
    pub sleep_end: Option<NaiveDateTime>,
    pub sleep_quality: Option<SleepQuality>,
    pub notes: Option<String>,
    pub created_at: String,
}

impl SleepRecord {
    /// Length of a finished sleep in fractional minutes.
    pub fn duration_minutes(&self) -> Option<f64> {
        self.sleep_end
            .map(|end| (end - self.sleep_start).num_seconds() as f64 / 60.0)
    }
}

#[derive(Debug, Deserialize)]
pub struct NewSleepRecord {
    pub sleep_start: NaiveDateTime,
    pub sleep_end: Option<NaiveDateTime>,
    pub sleep_quality: Option<SleepQuality>,
    pub notes: Option<String>,
}

impl NewSleepRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.sleep_end {
            Some(end) if end <= self.sleep_start => Err(ValidationError::EndsBeforeStart),
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CryRecord {
    pub id: String,
    pub baby_id: String,
    pub cry_time: NaiveDateTime,
    pub duration_minutes: u32,
    pub cry_type: CryType,
    pub resolution: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewCryRecord {
    pub cry_time: Option<NaiveDateTime>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub cry_type: CryType,
    pub resolution: Option<String>,
}

impl NewCryRecord {
    pub fn cry_time_or_now(&self) -> NaiveDateTime {
        self.cry_time.unwrap_or_else(now)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NutritionRecord {
    pub id: String,
    pub baby_id: String,
    pub meal_time: NaiveDateTime,
    pub meal_type: MealType,
    pub amount: Option<String>,
    pub food_items: FoodItems,
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewNutritionRecord {
    pub meal_time: Option<NaiveDateTime>,
    pub meal_type: MealType,
    pub amount: Option<String>,
    #[serde(default)]
    pub food_items: Vec<String>,
    pub notes: Option<String>,
}

impl NewNutritionRecord {
    pub fn meal_time_or_now(&self) -> NaiveDateTime {
        self.meal_time.unwrap_or_else(now)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WellnessRecord {
    pub id: String,
    pub date: NaiveDate,
    pub mood_rating: Option<u8>,
    pub stress_level: Option<u8>,
    pub notes: Option<String>,
    pub affirmation: Option<String>,
    pub mindfulness_minutes: u32,
    pub created_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewWellnessRecord {
    pub date: Option<NaiveDate>,
    pub mood_rating: Option<u8>,
    pub stress_level: Option<u8>,
    pub notes: Option<String>,
    pub affirmation: Option<String>,
    #[serde(default)]
    pub mindfulness_minutes: u32,
}

impl NewWellnessRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        on_scale("mood_rating", self.mood_rating)?;
        on_scale("stress_level", self.stress_level)
    }

    pub fn date_or_today(&self) -> NaiveDate {
        self.date.unwrap_or_else(today)
    }

    /// The entry's affirmation, defaulting to the one shown on its date.
    pub fn affirmation_or_daily(&self) -> String {
        self.affirmation
            .clone()
            .unwrap_or_else(|| affirmation_for(self.date_or_today()).to_string())
    }
}
