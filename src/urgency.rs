//! Deadline urgency estimation.
//!
//! Maps a due date to a scalar urgency in [0, 1] using fixed calendar-day
//! buckets relative to a reference date.
//!
//! | Days until due | Band | Urgency |
//! |----------------|------|---------|
//! | < 0 | Overdue | 1.0 |
//! | 0 | DueToday | 0.95 |
//! | 1..=3 | DueSoon | 0.8 |
//! | 4..=7 | ThisWeek | 0.6 |
//! | 8..=30 | ThisMonth | 0.4 |
//! | > 30 | Later | 0.2 |
//! | no date / unparseable | Unscheduled | 0.3 |

use chrono::NaiveDate;
use serde_json::Value;

/// Date format accepted for due dates.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Deadline proximity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyBand {
    /// Due date already passed.
    Overdue,
    /// Due on the reference date.
    DueToday,
    /// Due within 1-3 days.
    DueSoon,
    /// Due within 4-7 days.
    ThisWeek,
    /// Due within 8-30 days.
    ThisMonth,
    /// Due more than 30 days out.
    Later,
    /// No usable due date.
    Unscheduled,
}

impl UrgencyBand {
    /// Classifies a signed day distance (`due - today`).
    pub fn from_days(days_until_due: i64) -> Self {
        match days_until_due {
            d if d < 0 => Self::Overdue,
            0 => Self::DueToday,
            1..=3 => Self::DueSoon,
            4..=7 => Self::ThisWeek,
            8..=30 => Self::ThisMonth,
            _ => Self::Later,
        }
    }

    /// Urgency value for this band.
    pub fn urgency(self) -> f64 {
        match self {
            Self::Overdue => 1.0,
            Self::DueToday => 0.95,
            Self::DueSoon => 0.8,
            Self::ThisWeek => 0.6,
            Self::ThisMonth => 0.4,
            Self::Later => 0.2,
            Self::Unscheduled => 0.3,
        }
    }
}

/// Parses a `YYYY-MM-DD` string.
pub fn parse_due_date(due_date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(due_date, DUE_DATE_FORMAT).ok()
}

/// Calendar days from `today` until `due_date`, if it parses.
pub fn days_until(due_date: &str, today: NaiveDate) -> Option<i64> {
    parse_due_date(due_date).map(|due| (due - today).num_days())
}

/// Band of an optional due-date string.
pub fn classify(due_date: Option<&str>, today: NaiveDate) -> UrgencyBand {
    due_date
        .filter(|s| !s.is_empty())
        .and_then(|s| days_until(s, today))
        .map(UrgencyBand::from_days)
        .unwrap_or(UrgencyBand::Unscheduled)
}

/// Urgency of an optional due-date string relative to `today`.
///
/// Absent, empty or unparseable dates yield 0.3; parse failures are not
/// reported.
pub fn urgency(due_date: Option<&str>, today: NaiveDate) -> f64 {
    classify(due_date, today).urgency()
}

/// Urgency of a raw JSON due-date value. Non-string values count as
/// unparseable.
pub fn urgency_of_value(due_date: Option<&Value>, today: NaiveDate) -> f64 {
    match due_date {
        Some(Value::String(s)) => urgency(Some(s.as_str()), today),
        _ => UrgencyBand::Unscheduled.urgency(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 26).unwrap()
    }

    fn offset(days: i64) -> String {
        (today() + Duration::days(days))
            .format(DUE_DATE_FORMAT)
            .to_string()
    }

    #[test]
    fn test_overdue() {
        assert_eq!(urgency(Some(offset(-1).as_str()), today()), 1.0);
        assert_eq!(urgency(Some(offset(-400).as_str()), today()), 1.0);
    }

    #[test]
    fn test_due_today() {
        assert_eq!(urgency(Some(offset(0).as_str()), today()), 0.95);
    }

    #[test]
    fn test_due_soon() {
        for d in 1..=3 {
            assert_eq!(urgency(Some(offset(d).as_str()), today()), 0.8);
        }
    }

    #[test]
    fn test_this_week() {
        assert_eq!(urgency(Some(offset(4).as_str()), today()), 0.6);
        assert_eq!(urgency(Some(offset(7).as_str()), today()), 0.6);
    }

    #[test]
    fn test_this_month() {
        assert_eq!(urgency(Some(offset(8).as_str()), today()), 0.4);
        assert_eq!(urgency(Some(offset(30).as_str()), today()), 0.4);
    }

    #[test]
    fn test_later() {
        assert_eq!(urgency(Some(offset(31).as_str()), today()), 0.2);
        assert_eq!(urgency(Some(offset(60).as_str()), today()), 0.2);
    }

    #[test]
    fn test_no_signal() {
        assert_eq!(urgency(None, today()), 0.3);
        assert_eq!(urgency(Some(""), today()), 0.3);
        assert_eq!(urgency(Some("invalid-date"), today()), 0.3);
        assert_eq!(urgency(Some("2025-13-40"), today()), 0.3);
    }

    #[test]
    fn test_value_variants() {
        assert_eq!(urgency_of_value(Some(&json!(offset(0))), today()), 0.95);
        assert_eq!(urgency_of_value(Some(&json!(20251126)), today()), 0.3);
        assert_eq!(urgency_of_value(Some(&Value::Null), today()), 0.3);
        assert_eq!(urgency_of_value(None, today()), 0.3);
    }

    #[test]
    fn test_days_until_across_month_boundary() {
        assert_eq!(days_until("2025-12-01", today()), Some(5));
        assert_eq!(days_until("2025-11-25", today()), Some(-1));
        assert_eq!(days_until("nope", today()), None);
    }

    #[test]
    fn test_band_classification() {
        assert_eq!(classify(Some("2025-11-26"), today()), UrgencyBand::DueToday);
        assert_eq!(classify(None, today()), UrgencyBand::Unscheduled);
        assert_eq!(UrgencyBand::from_days(31), UrgencyBand::Later);
    }
}
