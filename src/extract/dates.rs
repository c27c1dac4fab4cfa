// File: src/extract/dates.rs
// Free-form date parsing. A chain of shape-gated grammars is tried in
// priority order; the first grammar whose shape predicate accepts the
// candidate gets to parse it. Unparseable input yields None, never an error.
use crate::model::event::year_in_range;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// One date format grammar. `matches` is a cheap shape predicate so that no
/// grammar ever attempts input shaped for a different grammar; `parse` does
/// the actual conversion. Implementations must not panic on any input.
///
/// Callers wanting a smarter parser (e.g. a natural-language one) can
/// prepend their own implementation via `parse_date_with`; this chain stays
/// as the guaranteed fallback.
pub trait DateGrammar: Sync {
    fn name(&self) -> &'static str;
    fn matches(&self, candidate: &str) -> bool;
    fn parse(&self, candidate: &str, reference: NaiveDate) -> Option<DateTime<Utc>>;
}

/// The built-in grammar chain, in priority order.
pub static DEFAULT_GRAMMARS: &[&dyn DateGrammar] = &[
    &IsoDateTime,
    &SlashNumeric,
    &MonthDayYear,
    &IsoDate,
    &DayMonthYear,
];

/// Parses a candidate date string against the default grammar chain.
/// `reference` supplies the year for candidates that omit one.
pub fn parse_date(candidate: &str, reference: NaiveDate) -> Option<DateTime<Utc>> {
    parse_date_with(candidate, reference, DEFAULT_GRAMMARS)
}

pub fn parse_date_with(
    candidate: &str,
    reference: NaiveDate,
    grammars: &[&dyn DateGrammar],
) -> Option<DateTime<Utc>> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }
    for grammar in grammars {
        if grammar.matches(candidate)
            && let Some(dt) = grammar.parse(candidate, reference)
        {
            // Bound check on the local calendar year, the one the source
            // document was written in.
            let year = dt.with_timezone(&Local).year();
            if year_in_range(year) {
                return Some(dt);
            }
            log::debug!(
                "{}: year {} out of range for {:?}",
                grammar.name(),
                year,
                candidate
            );
            return None;
        }
    }
    None
}

// --- SHARED HELPERS ---

/// Pins a bare date to local noon before converting to UTC, so timezone
/// conversion cannot shift the event to an adjacent day.
fn local_noon(date: NaiveDate) -> Option<DateTime<Utc>> {
    let noon = NaiveTime::from_hms_opt(12, 0, 0)?;
    date.and_time(noon)
        .and_local_timezone(Local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    match lower.trim_end_matches('.') {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Two-digit years below 50 land in the 2000s, the rest in the 1900s.
/// 19xx results then fail the global year bound, which is intentional.
fn expand_year(y: i32) -> i32 {
    if y >= 100 {
        y
    } else if y < 50 {
        2000 + y
    } else {
        1900 + y
    }
}

// --- GRAMMARS ---

/// RFC 3339 / ISO 8601 datetimes, with or without an offset.
pub struct IsoDateTime;

static ISO_DATETIME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}").unwrap());

impl DateGrammar for IsoDateTime {
    fn name(&self) -> &'static str {
        "iso-datetime"
    }
    fn matches(&self, candidate: &str) -> bool {
        ISO_DATETIME_SHAPE.is_match(candidate)
    }
    fn parse(&self, candidate: &str, _reference: NaiveDate) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(candidate) {
            return Some(dt.with_timezone(&Utc));
        }
        // Offset-less variants keep their wall-clock time in local tz.
        for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
            if let Ok(ndt) = NaiveDateTime::parse_from_str(candidate, fmt) {
                return ndt
                    .and_local_timezone(Local)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Utc));
            }
        }
        None
    }
}

/// Numeric `M/D/Y` and `M/D/YY`.
pub struct SlashNumeric;

static SLASH_PARTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4})$").unwrap());

impl DateGrammar for SlashNumeric {
    fn name(&self) -> &'static str {
        "slash-numeric"
    }
    fn matches(&self, candidate: &str) -> bool {
        SLASH_PARTS.is_match(candidate)
    }
    fn parse(&self, candidate: &str, _reference: NaiveDate) -> Option<DateTime<Utc>> {
        let caps = SLASH_PARTS.captures(candidate)?;
        let month: u32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        let year = expand_year(caps[3].parse().ok()?);
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        local_noon(date)
    }
}

/// Textual `Month D[, Y]`. A missing year falls back to the reference year.
pub struct MonthDayYear;

static MONTH_DAY_PARTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)\.?\s+(\d{1,2})(?:\s*,?\s+(\d{4}))?$").unwrap());

impl DateGrammar for MonthDayYear {
    fn name(&self) -> &'static str {
        "month-day-year"
    }
    fn matches(&self, candidate: &str) -> bool {
        MONTH_DAY_PARTS.is_match(candidate)
    }
    fn parse(&self, candidate: &str, reference: NaiveDate) -> Option<DateTime<Utc>> {
        let caps = MONTH_DAY_PARTS.captures(candidate)?;
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let year = match caps.get(3) {
            Some(y) => y.as_str().parse().ok()?,
            None => reference.year(),
        };
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        local_noon(date)
    }
}

/// ISO `Y-M-D` without a time component.
pub struct IsoDate;

static ISO_DATE_PARTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").unwrap());

impl DateGrammar for IsoDate {
    fn name(&self) -> &'static str {
        "iso-date"
    }
    fn matches(&self, candidate: &str) -> bool {
        ISO_DATE_PARTS.is_match(candidate)
    }
    fn parse(&self, candidate: &str, _reference: NaiveDate) -> Option<DateTime<Utc>> {
        let caps = ISO_DATE_PARTS.captures(candidate)?;
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        local_noon(date)
    }
}

/// Textual `D Month [Y]`, the day-first ordering common in PDF syllabi.
pub struct DayMonthYear;

static DAY_MONTH_PARTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\s+([A-Za-z]+)\.?(?:\s*,?\s+(\d{4}))?$").unwrap());

impl DateGrammar for DayMonthYear {
    fn name(&self) -> &'static str {
        "day-month-year"
    }
    fn matches(&self, candidate: &str) -> bool {
        DAY_MONTH_PARTS.is_match(candidate)
    }
    fn parse(&self, candidate: &str, reference: NaiveDate) -> Option<DateTime<Utc>> {
        let caps = DAY_MONTH_PARTS.captures(candidate)?;
        let day: u32 = caps[1].parse().ok()?;
        let month = month_number(&caps[2])?;
        let year = match caps.get(3) {
            Some(y) => y.as_str().parse().ok()?,
            None => reference.year(),
        };
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        local_noon(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    #[test]
    fn test_shape_gating() {
        // A slash date must not reach the textual grammars and vice versa.
        assert!(SlashNumeric.matches("10/20/2024"));
        assert!(!SlashNumeric.matches("December 15, 2024"));
        assert!(MonthDayYear.matches("December 15, 2024"));
        assert!(!MonthDayYear.matches("10/20/2024"));
    }

    #[test]
    fn test_invalid_day_returns_none() {
        assert_eq!(parse_date("3/45/2024", reference()), None);
    }

    #[test]
    fn test_two_digit_year_window() {
        let dt = parse_date("10/20/24", reference()).unwrap();
        assert_eq!(dt.with_timezone(&Local).year(), 2024);
        // 99 -> 1999, rejected by the year bound.
        assert_eq!(parse_date("10/20/99", reference()), None);
    }

    #[test]
    fn test_missing_year_uses_reference() {
        let dt = parse_date("December 15", reference()).unwrap();
        let local = dt.with_timezone(&Local);
        assert_eq!((local.year(), local.month(), local.day()), (2024, 12, 15));
        assert_eq!(local.hour(), 12);
    }
}
