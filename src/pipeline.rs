// File: src/pipeline.rs
// Batch orchestration around the per-course extractor: structured-record
// normalization, merge, dedup, sort, and final validation. Every function
// returns a fresh Vec; caller-supplied input is never mutated.
use crate::config::ExtractorConfig;
use crate::extract;
use crate::extract::dates;
use crate::model::record::strip_html_tags;
use crate::model::{AssignmentRecord, DateKind, ImportantDateEvent, RawSource};
use std::collections::HashSet;

/// Runs the full text pipeline over one source per course and produces the
/// final deduplicated, date-ordered list. Courses are independent: one
/// course yielding nothing (or garbage) never affects the others.
pub fn extract_batch(sources: &[RawSource], config: &ExtractorConfig) -> Vec<ImportantDateEvent> {
    let mut events = Vec::new();
    for source in sources {
        events.extend(extract::find_important_dates(
            &source.text,
            &source.course_name,
            source.origin,
            config,
        ));
    }
    finalize(events)
}

/// Converts structured assignment records for one course into events,
/// up to three per record (due / available / locked). Each timestamp field
/// is parsed independently; a bad field skips only itself.
pub fn normalize_assignments(
    course_name: &str,
    records: &[AssignmentRecord],
    config: &ExtractorConfig,
) -> Vec<ImportantDateEvent> {
    let mut events = Vec::new();

    for record in records {
        if record.is_dateless() {
            log::debug!("{}: no dates on {:?}", course_name, record.display_name());
            continue;
        }
        for kind in [DateKind::Due, DateKind::Available, DateKind::Locked] {
            if let Some(event) = record_event(course_name, record, kind, config) {
                events.push(event);
            }
        }
    }

    log::info!(
        "{}: {} events from {} assignment records",
        course_name,
        events.len(),
        records.len()
    );
    events
}

fn record_event(
    course_name: &str,
    record: &AssignmentRecord,
    kind: DateKind,
    config: &ExtractorConfig,
) -> Option<ImportantDateEvent> {
    let timestamp = match kind {
        DateKind::Due => record.due_at.as_deref()?,
        DateKind::Available => record.unlock_at.as_deref()?,
        DateKind::Locked => record.lock_at.as_deref()?,
    };
    let Some(date) = dates::parse_date(timestamp, config.reference_date()) else {
        log::debug!(
            "{}: unparseable {} timestamp {:?} on {:?}",
            course_name,
            kind,
            timestamp,
            record.display_name()
        );
        return None;
    };

    let name = record.display_name();
    let (title, description, raw_text) = match kind {
        DateKind::Due => {
            let description = match record.description.as_deref() {
                Some(html) if !html.trim().is_empty() => strip_html_tags(html),
                _ => format!("{} due date", name),
            };
            (
                name.to_string(),
                description,
                format!("Assignment: {} due: {}", name, timestamp),
            )
        }
        DateKind::Available => (
            format!("{} - Available", name),
            "Assignment becomes available".to_string(),
            format!("Assignment available: {}", timestamp),
        ),
        DateKind::Locked => (
            format!("{} - Locked", name),
            "Assignment locks".to_string(),
            format!("Assignment locks: {}", timestamp),
        ),
    };

    let mut event = ImportantDateEvent::new(
        course_name,
        date,
        title,
        &description,
        &raw_text,
        config.max_text_len,
    );
    // Pass-through identifiers so a caller can correlate with submission
    // status and filter completed work before display.
    event.assignment_id = record.id.map(|id| id.to_string());
    event.course_id = record.course_id.map(|id| id.to_string());
    Some(event)
}

/// Collapses duplicates and orders the final list.
///
/// Dedup key is `(course, date, title)`, first seen wins. The sort is
/// stable and ascending by date, so events on the same instant keep their
/// relative input order. Idempotent: re-running on its own output is a
/// no-op.
pub fn finalize(events: Vec<ImportantDateEvent>) -> Vec<ImportantDateEvent> {
    let mut seen = HashSet::new();
    let mut unique: Vec<ImportantDateEvent> = events
        .into_iter()
        .filter(|e| seen.insert(e.dedup_key()))
        .collect();
    unique.sort_by_key(|e| e.date);
    unique
}

/// Drops events that must not reach a sync step: empty course labels and
/// out-of-range dates. Malformed entries are discarded silently; the caller
/// sees a shorter list, not an error.
pub fn retain_valid(events: Vec<ImportantDateEvent>) -> Vec<ImportantDateEvent> {
    let before = events.len();
    let valid: Vec<ImportantDateEvent> = events.into_iter().filter(|e| e.is_valid()).collect();
    if valid.len() < before {
        log::info!("dropped {} invalid events", before - valid.len());
    }
    valid
}
