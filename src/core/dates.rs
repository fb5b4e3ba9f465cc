//! Due-date expression resolution.
//!
//! Resolves a single date expression ("tomorrow", "friday", "2024-06-15",
//! "15.06.2024") against an explicit reference date. Pure and stateless so
//! the parser stays deterministic and trivially testable.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Numeric fallback formats, tried in order after ISO.
const NUMERIC_FORMATS: [&str; 3] = ["%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y"];

/// Resolve a date expression against a reference date.
///
/// Matching is case-insensitive and first-match-wins:
/// 1. `today` / `tomorrow`
/// 2. a full weekday name, resolving to the next occurrence strictly after the
///    reference date, so "monday" on a Monday means a week out
/// 3. ISO `YYYY-MM-DD`
/// 4. `day.month.year`, `day/month/year`, `day-month-year`
///
/// Returns `None` when nothing matches or the candidate is not a real
/// calendar date.
#[must_use]
pub fn resolve_date(expression: &str, reference_date: NaiveDate) -> Option<NaiveDate> {
    let expression = expression.to_lowercase();

    match expression.as_str() {
        "today" => return Some(reference_date),
        "tomorrow" => return Some(reference_date + Duration::days(1)),
        _ => {}
    }

    if let Some(weekday) = weekday_from_name(&expression) {
        return Some(next_weekday(reference_date, weekday));
    }

    if let Ok(date) = NaiveDate::parse_from_str(&expression, "%Y-%m-%d") {
        return Some(date);
    }

    NUMERIC_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&expression, format).ok())
}

/// The next occurrence of `weekday` strictly after `reference_date`.
fn next_weekday(reference_date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut days_ahead = i64::from(weekday.num_days_from_monday())
        - i64::from(reference_date.weekday().num_days_from_monday());
    days_ahead = days_ahead.rem_euclid(7);
    if days_ahead == 0 {
        days_ahead = 7;
    }
    reference_date + Duration::days(days_ahead)
}

/// Match a full weekday name. Abbreviations are out of vocabulary.
fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
