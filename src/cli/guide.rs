use chrono::Local;

use super::GuideTopic;
use crate::reference::articles::articles_in;
use crate::reference::emergency::{self, EMERGENCY_CONTACTS, EmergencyCard};
use crate::reference::wellness::affirmation_for;

fn print_card(card: &EmergencyCard) {
    println!("[{}] {} ({:?})", card.id, card.title, card.category);
    println!("  Symptoms:");
    for symptom in card.symptoms {
        println!("    - {}", symptom);
    }
    println!("  What to do:");
    for (i, step) in card.steps.iter().enumerate() {
        println!("    {}. {}", i + 1, step);
    }
    println!("  Call the doctor: {}", card.when_to_call_doctor);
}

pub fn run(topic: GuideTopic) {
    match topic {
        GuideTopic::Emergency { id: Some(id), .. } => match emergency::find_card(&id) {
            Some(card) => print_card(card),
            None => println!("No emergency card with id {}", id),
        },
        GuideTopic::Emergency { id: None, category } => {
            for card in emergency::cards(category) {
                print_card(card);
                println!();
            }
            for contact in EMERGENCY_CONTACTS {
                println!("{}: {} ({})", contact.name, contact.number, contact.description);
            }
        }
        GuideTopic::Articles { category } => {
            for article in articles_in(category.as_deref()) {
                println!(
                    "{} [{}] {} min, {}",
                    article.title, article.category, article.read_time_minutes, article.source
                );
                println!("  {}", article.summary);
            }
        }
        GuideTopic::Affirmation { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            println!("{}", affirmation_for(date));
        }
    }
}
