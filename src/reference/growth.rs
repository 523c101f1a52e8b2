//! WHO child growth standards, 0 to 24 months.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize)]
pub struct PercentileRow {
    pub month: u32,
    pub p3: f64,
    pub p15: f64,
    pub p50: f64,
    pub p85: f64,
    pub p97: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PercentileBand {
    #[serde(rename = "<3rd")]
    Below3rd,
    #[serde(rename = "3rd-15th")]
    P3To15,
    #[serde(rename = "15th-50th")]
    P15To50,
    #[serde(rename = "50th-85th")]
    P50To85,
    #[serde(rename = "85th-97th")]
    P85To97,
    #[serde(rename = ">97th")]
    Above97th,
}

impl PercentileBand {
    pub fn label(&self) -> &'static str {
        match self {
            PercentileBand::Below3rd => "<3rd",
            PercentileBand::P3To15 => "3rd-15th",
            PercentileBand::P15To50 => "15th-50th",
            PercentileBand::P50To85 => "50th-85th",
            PercentileBand::P85To97 => "85th-97th",
            PercentileBand::Above97th => ">97th",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Weight,
    Height,
}

const fn row(month: u32, p3: f64, p15: f64, p50: f64, p85: f64, p97: f64) -> PercentileRow {
    PercentileRow {
        month,
        p3,
        p15,
        p50,
        p85,
        p97,
    }
}

/// Weight in kg
pub const WEIGHT_BOYS: &[PercentileRow] = &[
    row(0, 2.5, 2.9, 3.3, 3.9, 4.4),
    row(1, 3.4, 3.9, 4.5, 5.1, 5.8),
    row(2, 4.3, 4.9, 5.6, 6.3, 7.1),
    row(3, 5.0, 5.7, 6.4, 7.2, 8.0),
    row(4, 5.6, 6.2, 7.0, 7.8, 8.7),
    row(5, 6.0, 6.7, 7.5, 8.4, 9.3),
    row(6, 6.4, 7.1, 7.9, 8.8, 9.8),
    row(9, 7.1, 7.8, 8.9, 9.9, 10.9),
    row(12, 7.7, 8.6, 9.6, 10.8, 11.8),
    row(15, 8.3, 9.2, 10.3, 11.5, 12.8),
    row(18, 8.8, 9.8, 10.9, 12.2, 13.5),
    row(24, 9.7, 10.8, 12.2, 13.6, 15.3),
];

/// Weight in kg
pub const WEIGHT_GIRLS: &[PercentileRow] = &[
    row(0, 2.4, 2.8, 3.2, 3.7, 4.2),
    row(1, 3.2, 3.6, 4.2, 4.8, 5.5),
    row(2, 3.9, 4.5, 5.1, 5.8, 6.6),
    row(3, 4.5, 5.2, 5.8, 6.6, 7.5),
    row(4, 5.0, 5.7, 6.4, 7.3, 8.2),
    row(5, 5.4, 6.1, 6.9, 7.8, 8.8),
    row(6, 5.7, 6.5, 7.3, 8.2, 9.3),
    row(9, 6.4, 7.3, 8.2, 9.3, 10.5),
    row(12, 7.0, 7.9, 8.9, 10.1, 11.3),
    row(15, 7.6, 8.5, 9.6, 10.9, 12.2),
    row(18, 8.1, 9.1, 10.2, 11.6, 13.0),
    row(24, 9.0, 10.2, 11.5, 13.0, 14.8),
];

/// Length/height in cm
pub const HEIGHT_BOYS: &[PercentileRow] = &[
    row(0, 46.1, 48.0, 49.9, 51.8, 53.7),
    row(1, 50.8, 52.8, 54.7, 56.7, 58.6),
    row(2, 54.4, 56.4, 58.4, 60.4, 62.4),
    row(3, 57.3, 59.4, 61.4, 63.5, 65.5),
    row(4, 59.7, 61.8, 63.9, 66.0, 68.0),
    row(5, 61.7, 63.8, 65.9, 68.0, 70.1),
    row(6, 63.3, 65.5, 67.6, 69.8, 71.9),
    row(9, 67.7, 70.1, 72.0, 74.5, 76.5),
    row(12, 71.0, 73.4, 75.7, 78.1, 80.5),
    row(15, 74.1, 76.6, 79.1, 81.7, 84.2),
    row(18, 76.9, 79.6, 82.3, 85.0, 87.7),
    row(24, 81.7, 84.8, 87.8, 90.9, 93.9),
];

/// Length/height in cm
pub const HEIGHT_GIRLS: &[PercentileRow] = &[
    row(0, 45.4, 47.3, 49.1, 51.0, 52.9),
    row(1, 49.8, 51.7, 53.7, 55.6, 57.6),
    row(2, 53.0, 55.0, 57.1, 59.1, 61.1),
    row(3, 55.6, 57.7, 59.8, 61.9, 64.0),
    row(4, 57.8, 59.9, 62.1, 64.3, 66.4),
    row(5, 59.6, 61.8, 64.0, 66.2, 68.5),
    row(6, 61.2, 63.5, 65.7, 68.0, 70.3),
    row(9, 65.3, 67.7, 70.1, 72.6, 75.0),
    row(12, 68.9, 71.4, 74.0, 76.6, 79.2),
    row(15, 72.0, 74.8, 77.5, 80.2, 83.0),
    row(18, 74.9, 77.8, 80.7, 83.6, 86.5),
    row(24, 80.0, 83.2, 86.4, 89.6, 92.9),
];

/// The chart for a measure. Boys' charts are used for male babies and
/// girls' charts for everyone else.
pub fn chart(measure: Measure, male: bool) -> &'static [PercentileRow] {
    match (measure, male) {
        (Measure::Weight, true) => WEIGHT_BOYS,
        (Measure::Weight, false) => WEIGHT_GIRLS,
        (Measure::Height, true) => HEIGHT_BOYS,
        (Measure::Height, false) => HEIGHT_GIRLS,
    }
}

/// Places `value` in a percentile band using the chart row closest to
/// `month`. On a tie the earlier row wins.
pub fn percentile_band(value: f64, chart: &[PercentileRow], month: i32) -> Option<PercentileBand> {
    let closest = chart
        .iter()
        .min_by_key(|row| (i64::from(row.month) - i64::from(month)).abs())?;

    let band = if value < closest.p3 {
        PercentileBand::Below3rd
    } else if value < closest.p15 {
        PercentileBand::P3To15
    } else if value < closest.p50 {
        PercentileBand::P15To50
    } else if value < closest.p85 {
        PercentileBand::P50To85
    } else if value < closest.p97 {
        PercentileBand::P85To97
    } else {
        PercentileBand::Above97th
    };
    Some(band)
}
