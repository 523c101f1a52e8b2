use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Urgent,
    Moderate,
    Info,
}

#[derive(Debug, Serialize)]
pub struct EmergencyCard {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Severity,
    pub symptoms: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub when_to_call_doctor: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub number: &'static str,
    pub description: &'static str,
}

pub const EMERGENCY_CARDS: &[EmergencyCard] = &[
    EmergencyCard {
        id: "1",
        title: "High Fever",
        category: Severity::Urgent,
        symptoms: &[
            "Temperature above 100.4°F (38°C) in babies under 3 months",
            "Temperature above 102°F (38.9°C) in older babies",
            "Fever lasting more than 24 hours",
        ],
        steps: &[
            "Measure temperature accurately with a rectal thermometer",
            "Keep baby comfortable and lightly dressed",
            "Offer plenty of fluids",
            "Monitor for other symptoms",
            "Give fever reducer only if doctor recommends",
        ],
        when_to_call_doctor: "Immediately if under 3 months with any fever, or if fever is very high, persistent, or accompanied by other concerning symptoms.",
    },
    EmergencyCard {
        id: "2",
        title: "Choking",
        category: Severity::Urgent,
        symptoms: &[
            "Inability to cry or cough",
            "Blue skin color",
            "Difficulty breathing",
            "Loss of consciousness",
        ],
        steps: &[
            "Call emergency services immediately",
            "For infants: Give 5 back blows between shoulder blades",
            "For infants: Give 5 chest thrusts if back blows don't work",
            "Continue until object is dislodged or baby becomes unconscious",
            "If unconscious, begin CPR",
        ],
        when_to_call_doctor: "Call 911 immediately if baby is choking and cannot breathe.",
    },
    EmergencyCard {
        id: "3",
        title: "Dehydration",
        category: Severity::Moderate,
        symptoms: &[
            "Fewer wet diapers",
            "Dry mouth and lips",
            "No tears when crying",
            "Sunken soft spot",
            "Lethargy",
        ],
        steps: &[
            "Offer breast milk or formula more frequently",
            "If recommended by doctor, give oral rehydration solution",
            "Monitor number of wet diapers",
            "Check for signs of improvement",
            "Keep baby cool if ill",
        ],
        when_to_call_doctor: "If baby shows signs of severe dehydration, refuses to feed, or has no wet diapers for 6+ hours.",
    },
    EmergencyCard {
        id: "4",
        title: "Persistent Crying",
        category: Severity::Moderate,
        symptoms: &[
            "Crying for more than 3 hours",
            "Cannot be consoled",
            "Unusual high-pitched cry",
            "Accompanied by other symptoms",
        ],
        steps: &[
            "Check if baby is hungry, tired, or needs diaper change",
            "Look for signs of discomfort or pain",
            "Try soothing techniques: rocking, white noise, skin-to-skin",
            "Check temperature",
            "Examine for tight clothing or hair tourniquets",
        ],
        when_to_call_doctor: "If crying is unusual, very intense, or accompanied by fever, vomiting, or other symptoms.",
    },
    EmergencyCard {
        id: "5",
        title: "Breathing Difficulties",
        category: Severity::Urgent,
        symptoms: &[
            "Rapid breathing",
            "Flared nostrils",
            "Chest retractions",
            "Wheezing",
            "Blue lips or face",
        ],
        steps: &[
            "Call emergency services immediately",
            "Keep baby upright",
            "Clear any visible obstructions from airway",
            "Stay calm and reassuring",
            "Monitor breathing rate and color",
        ],
        when_to_call_doctor: "Call 911 immediately for any severe breathing difficulty.",
    },
    EmergencyCard {
        id: "6",
        title: "Falls and Head Injuries",
        category: Severity::Moderate,
        symptoms: &[
            "Fall from height",
            "Hit head",
            "Loss of consciousness",
            "Vomiting after head injury",
            "Unusual behavior",
        ],
        steps: &[
            "Stay calm and assess the situation",
            "Check for consciousness and breathing",
            "Look for visible injuries",
            "Keep baby still if neck or spine injury suspected",
            "Apply cold compress to bumps",
            "Monitor for 24-48 hours",
        ],
        when_to_call_doctor: "Immediately if baby lost consciousness, is vomiting, seems confused, or fall was from significant height.",
    },
    EmergencyCard {
        id: "7",
        title: "Allergic Reactions",
        category: Severity::Urgent,
        symptoms: &[
            "Hives or rash",
            "Swelling of face or lips",
            "Difficulty breathing",
            "Vomiting",
            "Pale or blue skin",
        ],
        steps: &[
            "Call emergency services if breathing difficulty or severe swelling",
            "Remove allergen source if known",
            "Give antihistamine only if previously prescribed",
            "Monitor breathing closely",
            "Keep baby comfortable and calm",
        ],
        when_to_call_doctor: "Call 911 for severe reactions. Contact doctor for any allergic reaction in babies.",
    },
    EmergencyCard {
        id: "8",
        title: "Diarrhea and Vomiting",
        category: Severity::Moderate,
        symptoms: &[
            "Multiple episodes of diarrhea",
            "Frequent vomiting",
            "Blood in stool",
            "Signs of dehydration",
            "Fever",
        ],
        steps: &[
            "Continue breastfeeding or formula feeding",
            "Offer small, frequent amounts of fluid",
            "Monitor for dehydration signs",
            "Keep track of number of episodes",
            "Maintain good hygiene",
        ],
        when_to_call_doctor: "If baby has signs of dehydration, blood in stool, persistent vomiting, or is under 3 months old.",
    },
];

pub const EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        name: "Emergency Services",
        number: "911",
        description: "For life-threatening emergencies",
    },
    EmergencyContact {
        name: "Poison Control",
        number: "1-800-222-1222",
        description: "For poisoning emergencies",
    },
    EmergencyContact {
        name: "Pediatrician",
        number: "Add your doctor",
        description: "Your baby's doctor",
    },
];

pub fn find_card(id: &str) -> Option<&'static EmergencyCard> {
    EMERGENCY_CARDS.iter().find(|card| card.id == id)
}

/// Cards in the given category, or all of them.
pub fn cards(category: Option<Severity>) -> Vec<&'static EmergencyCard> {
    EMERGENCY_CARDS
        .iter()
        .filter(|card| category.is_none_or(|c| card.category == c))
        .collect()
}
