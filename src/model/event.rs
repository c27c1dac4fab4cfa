// File: src/model/event.rs
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Parsed years outside this range are treated as spurious matches
/// (course codes, page numbers, citation years).
pub const MIN_EVENT_YEAR: i32 = 2000;
pub const MAX_EVENT_YEAR: i32 = 2100;

/// Fallback label when no better title can be derived from context.
pub const DEFAULT_TITLE: &str = "Important Date";

/// Default truncation length for description/provenance text.
pub const MAX_TEXT_LEN: usize = 200;

/// Where a course's text came from. PDF extraction produces noisier
/// output, so downstream line splitting is more conservative for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceOrigin {
    Html,
    Pdf,
}

/// One course's worth of unstructured text, as handed over by whatever
/// fetched and rendered the document.
#[derive(Debug, Clone)]
pub struct RawSource {
    pub text: String,
    pub course_name: String,
    pub origin: SourceOrigin,
}

impl RawSource {
    pub fn new(text: impl Into<String>, course_name: impl Into<String>, origin: SourceOrigin) -> Self {
        Self {
            text: text.into(),
            course_name: course_name.into(),
            origin,
        }
    }
}

/// Which timestamp field of a structured record an event was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum DateKind {
    Due,
    Available,
    Locked,
}

/// A date-bearing match pending parsing. Dropped mid-pipeline when
/// `parsed_date` is None; never reaches the output.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub course_name: String,
    pub raw_match_text: String,
    pub context_window: String,
    pub date_text: String,
    pub parsed_date: Option<DateTime<Utc>>,
}

/// The engine's output entity. Value-like; the caller owns the final list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportantDateEvent {
    pub course: String,
    pub date: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub raw_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
}

impl ImportantDateEvent {
    /// Builds an event, truncating free text to `max_text_len` characters.
    /// Overlength input is clipped, never rejected.
    pub fn new(
        course: impl Into<String>,
        date: DateTime<Utc>,
        title: impl Into<String>,
        description: &str,
        raw_text: &str,
        max_text_len: usize,
    ) -> Self {
        Self {
            course: course.into(),
            date,
            title: title.into(),
            description: truncate_chars(description.trim(), max_text_len),
            raw_text: truncate_chars(raw_text.trim(), max_text_len),
            assignment_id: None,
            course_id: None,
        }
    }

    /// Identity used for duplicate collapsing: same course, same instant,
    /// same title. Differing description/raw_text does not distinguish events.
    pub fn dedup_key(&self) -> (String, DateTime<Utc>, String) {
        (self.course.clone(), self.date, self.title.clone())
    }

    /// An event is valid when its course label is non-empty after trimming
    /// and its year falls inside the accepted window.
    pub fn is_valid(&self) -> bool {
        !self.course.trim().is_empty() && year_in_range(self.date.year())
    }
}

pub fn year_in_range(year: i32) -> bool {
    (MIN_EVENT_YEAR..MAX_EVENT_YEAR).contains(&year)
}

/// Character-boundary-safe truncation.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
