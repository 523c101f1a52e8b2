use serde::Serialize;

pub const ALL_CATEGORIES: &str = "All";

pub const CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Sleep",
    "Nutrition",
    "Development",
    "Health",
    "Safety",
    "Parent Wellness",
];

#[derive(Debug, Serialize)]
pub struct Article {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub source: &'static str,
    pub summary: &'static str,
    pub age_range: &'static str,
    pub read_time_minutes: u32,
}

pub const EXPERT_ARTICLES: &[Article] = &[
    Article {
        id: "1",
        title: "Understanding Baby Sleep Patterns",
        category: "Sleep",
        source: "AAP",
        summary: "Learn about healthy sleep patterns for babies and how to establish good sleep routines from birth through toddlerhood.",
        age_range: "0-24 months",
        read_time_minutes: 5,
    },
    Article {
        id: "2",
        title: "Introduction to Solid Foods",
        category: "Nutrition",
        source: "WHO",
        summary: "Expert guidance on when and how to introduce solid foods, including signs of readiness and first food recommendations.",
        age_range: "4-12 months",
        read_time_minutes: 7,
    },
    Article {
        id: "3",
        title: "Developmental Milestones: First Year",
        category: "Development",
        source: "CDC",
        summary: "Track your baby's development with this comprehensive guide to milestones in the first 12 months of life.",
        age_range: "0-12 months",
        read_time_minutes: 10,
    },
    Article {
        id: "4",
        title: "Vaccination Schedule and Safety",
        category: "Health",
        source: "CDC",
        summary: "Complete guide to recommended vaccinations, their importance, and what to expect during and after immunizations.",
        age_range: "0-24 months",
        read_time_minutes: 8,
    },
    Article {
        id: "5",
        title: "Postpartum Mental Health",
        category: "Parent Wellness",
        source: "NHS",
        summary: "Understanding postpartum emotions, recognizing signs of postpartum depression, and knowing when to seek help.",
        age_range: "All",
        read_time_minutes: 6,
    },
    Article {
        id: "6",
        title: "Baby Safety at Home",
        category: "Safety",
        source: "Red Cross",
        summary: "Essential tips for childproofing your home and preventing common accidents as your baby becomes more mobile.",
        age_range: "6-24 months",
        read_time_minutes: 9,
    },
    Article {
        id: "7",
        title: "Breastfeeding: Getting Started",
        category: "Nutrition",
        source: "UNICEF",
        summary: "Practical advice for new mothers on establishing breastfeeding, common challenges, and when to seek support.",
        age_range: "0-6 months",
        read_time_minutes: 8,
    },
    Article {
        id: "8",
        title: "Understanding Baby Crying",
        category: "Development",
        source: "AAP",
        summary: "Learn to decode different types of crying and effective soothing techniques for fussy babies.",
        age_range: "0-12 months",
        read_time_minutes: 5,
    },
];

/// Articles in `category`. "All" (or no category) returns every article.
pub fn articles_in(category: Option<&str>) -> Vec<&'static Article> {
    match category {
        None | Some(ALL_CATEGORIES) => EXPERT_ARTICLES.iter().collect(),
        Some(category) => EXPERT_ARTICLES
            .iter()
            .filter(|article| article.category == category)
            .collect(),
    }
}
