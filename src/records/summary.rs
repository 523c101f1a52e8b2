//! Figures derived from the logs for display.
use chrono::NaiveDate;
use serde::Serialize;

use super::{Baby, Gender, GrowthRecord, MealType, NutritionRecord, SleepRecord, WellnessRecord};
use crate::reference::age_in_months;
use crate::reference::growth::{Measure, PercentileBand, chart, percentile_band};

const WEEK: usize = 7;

#[derive(Debug, PartialEq, Serialize)]
pub struct GrowthSummary {
    pub age_months: i32,
    pub weight_percentile: Option<PercentileBand>,
    pub height_percentile: Option<PercentileBand>,
}

/// Percentile bands for the most recent measurement in `records`, which
/// are expected newest first. Returns `None` when there is nothing to
/// place on a chart.
pub fn growth_summary(
    baby: &Baby,
    records: &[GrowthRecord],
    today: NaiveDate,
) -> Option<GrowthSummary> {
    let latest = records.first()?;
    if latest.weight_kg.is_none() && latest.height_cm.is_none() {
        return None;
    }

    let age_months = age_in_months(baby.birth_date, today);
    let male = baby.gender == Gender::Male;
    let band = |value: Option<f64>, measure| {
        value.and_then(|v| percentile_band(v, chart(measure, male), age_months))
    };

    Some(GrowthSummary {
        age_months,
        weight_percentile: band(latest.weight_kg, Measure::Weight),
        height_percentile: band(latest.height_cm, Measure::Height),
    })
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SleepSummary {
    pub average_hours: i64,
    pub average_minutes: i64,
    pub quality_percent: i64,
    pub total_records: usize,
}

/// Averages over the sleeps that have ended. Returns `None` if none have.
pub fn sleep_summary(records: &[SleepRecord]) -> Option<SleepSummary> {
    let completed: Vec<&SleepRecord> = records.iter().filter(|r| r.sleep_end.is_some()).collect();
    if completed.is_empty() {
        return None;
    }
    let count = completed.len() as f64;

    let total_minutes: f64 = completed.iter().filter_map(|r| r.duration_minutes()).sum();
    let average = (total_minutes / count).round() as i64;

    let restful = completed
        .iter()
        .filter(|r| r.sleep_quality.is_some_and(|q| q.is_restful()))
        .count();

    Some(SleepSummary {
        average_hours: average.div_euclid(60),
        average_minutes: average.rem_euclid(60),
        quality_percent: (restful as f64 / count * 100.0).round() as i64,
        total_records: completed.len(),
    })
}

#[derive(Debug, PartialEq, Serialize)]
pub struct WeeklyWellness {
    pub average_mood: f64,
    pub average_stress: f64,
    pub total_mindfulness_minutes: u32,
    pub days_tracked: usize,
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Summary of the seven most recent entries. Unrated mood or stress
/// counts as zero.
pub fn weekly_wellness(records: &[WellnessRecord]) -> Option<WeeklyWellness> {
    let week = &records[..records.len().min(WEEK)];
    if week.is_empty() {
        return None;
    }
    let count = week.len() as f64;

    let mood: u32 = week.iter().map(|r| r.mood_rating.unwrap_or(0) as u32).sum();
    let stress: u32 = week.iter().map(|r| r.stress_level.unwrap_or(0) as u32).sum();

    Some(WeeklyWellness {
        average_mood: one_decimal(mood as f64 / count),
        average_stress: one_decimal(stress as f64 / count),
        total_mindfulness_minutes: week.iter().map(|r| r.mindfulness_minutes).sum(),
        days_tracked: week.len(),
    })
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct MealStats {
    pub total_meals: usize,
    pub breast_milk: usize,
    pub formula: usize,
    pub solids: usize,
}

/// Counts meals logged on `day`.
pub fn meal_stats(records: &[NutritionRecord], day: NaiveDate) -> MealStats {
    records
        .iter()
        .filter(|r| r.meal_time.date() == day)
        .fold(MealStats::default(), |mut stats, r| {
            stats.total_meals += 1;
            match r.meal_type {
                MealType::BreastMilk => stats.breast_milk += 1,
                MealType::Formula => stats.formula += 1,
                MealType::SolidFood => stats.solids += 1,
                MealType::Snack | MealType::Water => {}
            }
            stats
        })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Sleep,
    Growth,
    Nutrition,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

/// General observations shown before there is enough data for anything
/// specific. Age here is counted in 30 day months.
pub fn baseline_insights(baby: &Baby, today: NaiveDate) -> Vec<Insight> {
    let age_months = (today - baby.birth_date).num_days().div_euclid(30);
    let name = &baby.name;
    vec![
        Insight {
            kind: InsightKind::Sleep,
            title: "Sleep Pattern Observation".to_string(),
            description: format!(
                "{} is averaging good sleep durations. Continue maintaining consistent bedtime routines.",
                name
            ),
            date: today,
        },
        Insight {
            kind: InsightKind::Growth,
            title: "Growth Milestone".to_string(),
            description: format!(
                "At {} months, {} is developing well. Keep tracking measurements regularly.",
                age_months, name
            ),
            date: today,
        },
        Insight {
            kind: InsightKind::Nutrition,
            title: "Feeding Recommendation".to_string(),
            description: format!(
                "Based on {}'s age, consider introducing new food textures if you haven't already.",
                name
            ),
            date: today,
        },
    ]
}
