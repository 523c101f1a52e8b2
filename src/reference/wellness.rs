use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const DAILY_AFFIRMATIONS: [&str; 15] = [
    "You are doing an amazing job as a parent.",
    "It's okay to ask for help. You don't have to do everything alone.",
    "Taking care of yourself is taking care of your baby.",
    "You are enough, exactly as you are.",
    "Every small step you take matters.",
    "Your love and presence are the greatest gifts you can give.",
    "It's okay to have difficult days. Tomorrow is a new start.",
    "You are stronger than you think.",
    "Your baby is lucky to have you.",
    "Remember to be kind to yourself today.",
    "You're learning and growing alongside your baby.",
    "Rest is not a luxury, it's a necessity.",
    "You're doing better than you think you are.",
    "Your feelings are valid, and it's okay to express them.",
    "Every parent has challenging moments. You're not alone.",
];

/// Affirmation of the day, rotating on the day of the year (1 for Jan 1).
pub fn affirmation_for(date: NaiveDate) -> &'static str {
    DAILY_AFFIRMATIONS[date.ordinal() as usize % DAILY_AFFIRMATIONS.len()]
}

#[derive(Debug, Serialize)]
pub struct MindfulnessExercise {
    pub title: &'static str,
    pub duration_minutes: u32,
    pub description: &'static str,
    pub steps: &'static [&'static str],
}

pub const MINDFULNESS_EXERCISES: &[MindfulnessExercise] = &[
    MindfulnessExercise {
        title: "5-Minute Breathing",
        duration_minutes: 5,
        description: "Focus on your breath for 5 minutes. Breathe in for 4 counts, hold for 4, exhale for 4.",
        steps: &[
            "Find a quiet, comfortable space",
            "Close your eyes or soften your gaze",
            "Breathe in slowly through your nose for 4 counts",
            "Hold your breath for 4 counts",
            "Exhale slowly through your mouth for 4 counts",
            "Repeat for 5 minutes",
        ],
    },
    MindfulnessExercise {
        title: "Body Scan",
        duration_minutes: 10,
        description: "Progressive relaxation from head to toe.",
        steps: &[
            "Lie down or sit comfortably",
            "Close your eyes",
            "Start with your head, notice any tension",
            "Slowly scan down through your body",
            "Release tension as you notice it",
            "End at your toes, feeling completely relaxed",
        ],
    },
    MindfulnessExercise {
        title: "Gratitude Moment",
        duration_minutes: 3,
        description: "Take a moment to appreciate three things from today.",
        steps: &[
            "Think of one thing that made you smile today",
            "Recall a moment of connection with your baby",
            "Acknowledge something you accomplished, no matter how small",
            "Take a deep breath and feel grateful",
        ],
    },
    MindfulnessExercise {
        title: "Quick Energy Reset",
        duration_minutes: 2,
        description: "Rapid energy boost when you're exhausted.",
        steps: &[
            "Stand up and stretch your arms overhead",
            "Take 3 deep breaths",
            "Roll your shoulders back 5 times",
            "Shake out your hands and feet",
            "Drink a glass of water",
        ],
    },
];

pub fn mood_emoji(mood: u8) -> Option<&'static str> {
    match mood {
        1 => Some("😢"),
        2 => Some("😕"),
        3 => Some("😐"),
        4 => Some("🙂"),
        5 => Some("😊"),
        _ => None,
    }
}

pub fn stress_label(stress: u8) -> Option<&'static str> {
    match stress {
        1 => Some("Very Low"),
        2 => Some("Low"),
        3 => Some("Moderate"),
        4 => Some("High"),
        5 => Some("Very High"),
        _ => None,
    }
}
