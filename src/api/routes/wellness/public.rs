//! Public types for the wellness API
use serde::Serialize;

pub use crate::records::summary::WeeklyWellness;
pub use crate::records::{NewWellnessRecord, WellnessRecord};

#[derive(Serialize)]
pub struct WeeklyWellnessResponse {
    pub summary: Option<WeeklyWellness>,
}
