//! Static reference content shipped with the app.
pub mod articles;
pub mod emergency;
pub mod growth;
pub mod nutrition;
pub mod wellness;

use chrono::{Datelike, NaiveDate};

/// Whole calendar months between `birth` and `today`, ignoring the
/// day of the month.
pub fn age_in_months(birth: NaiveDate, today: NaiveDate) -> i32 {
    (today.year() - birth.year()) * 12 + (today.month() as i32 - birth.month() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_age_in_months() {
        assert_eq!(age_in_months(date("2025-01-15"), date("2025-01-31")), 0);
        assert_eq!(age_in_months(date("2025-01-31"), date("2025-02-01")), 1);
        assert_eq!(age_in_months(date("2024-11-10"), date("2025-03-01")), 4);
        assert_eq!(age_in_months(date("2023-06-01"), date("2025-06-01")), 24);
    }
}
