use chrono::NaiveDate;
use serde::Serialize;

use super::age_in_months;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AgeCategory {
    #[serde(rename = "0-6months")]
    UpToSixMonths,
    #[serde(rename = "6-8months")]
    SixToEightMonths,
    #[serde(rename = "8-12months")]
    EightToTwelveMonths,
    #[serde(rename = "12-24months")]
    TwelveToTwentyFourMonths,
}

impl AgeCategory {
    pub fn from_months(months: i32) -> Self {
        match months {
            m if m < 6 => AgeCategory::UpToSixMonths,
            m if m < 8 => AgeCategory::SixToEightMonths,
            m if m < 12 => AgeCategory::EightToTwelveMonths,
            _ => AgeCategory::TwelveToTwentyFourMonths,
        }
    }

    pub fn meal_suggestion(&self) -> &'static MealSuggestion {
        let position = MEAL_SUGGESTIONS
            .iter()
            .position(|s| s.age_category == *self)
            .unwrap_or_default();
        &MEAL_SUGGESTIONS[position]
    }
}

pub fn age_category(birth: NaiveDate, today: NaiveDate) -> AgeCategory {
    AgeCategory::from_months(age_in_months(birth, today))
}

#[derive(Debug, Serialize)]
pub struct MealSuggestion {
    pub age_category: AgeCategory,
    pub meals: &'static [&'static str],
    pub notes: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FeedingGuideline {
    pub age_range: &'static str,
    pub feedings: &'static str,
}

pub const MEAL_SUGGESTIONS: &[MealSuggestion] = &[
    MealSuggestion {
        age_category: AgeCategory::UpToSixMonths,
        meals: &["Breast milk or formula only"],
        notes: "Exclusive breastfeeding or formula feeding recommended for first 6 months",
    },
    MealSuggestion {
        age_category: AgeCategory::SixToEightMonths,
        meals: &[
            "Iron-fortified rice cereal",
            "Pureed vegetables (sweet potato, carrots, peas)",
            "Pureed fruits (banana, apple sauce, pears)",
            "Breast milk or formula",
        ],
        notes: "Introduce single-ingredient purees one at a time",
    },
    MealSuggestion {
        age_category: AgeCategory::EightToTwelveMonths,
        meals: &[
            "Soft-cooked vegetables",
            "Soft fruits (banana, avocado, peach)",
            "Soft-cooked grains (oatmeal, pasta)",
            "Protein (scrambled eggs, tofu, beans)",
            "Breast milk or formula",
        ],
        notes: "Introduce finger foods and soft textures",
    },
    MealSuggestion {
        age_category: AgeCategory::TwelveToTwentyFourMonths,
        meals: &[
            "Whole grain bread and pasta",
            "Variety of fruits and vegetables",
            "Protein sources (chicken, fish, eggs, legumes)",
            "Dairy products (milk, yogurt, cheese)",
            "Healthy fats (avocado, nut butters)",
        ],
        notes: "Transition to family foods with varied textures",
    },
];

pub const FEEDING_SCHEDULE: &[FeedingGuideline] = &[
    FeedingGuideline {
        age_range: "0-3months",
        feedings: "8-12 feedings per day",
    },
    FeedingGuideline {
        age_range: "3-6months",
        feedings: "6-8 feedings per day",
    },
    FeedingGuideline {
        age_range: "6-9months",
        feedings: "3-4 meals + 2-3 milk feedings per day",
    },
    FeedingGuideline {
        age_range: "9-12months",
        feedings: "3 meals + 2-3 snacks + milk feedings per day",
    },
    FeedingGuideline {
        age_range: "12-24months",
        feedings: "3 meals + 2 snacks per day",
    },
];
