// File: ./src/extract/mod.rs
// Per-course extraction: keyword-gated scan, contextual pattern tier, and
// the generic fallback tier. Output is unordered and may contain duplicates
// across courses; `pipeline::finalize` handles merge, dedup and sort.
pub mod dates;
pub mod patterns;
pub mod scanner;
pub mod title;

use crate::config::ExtractorConfig;
use crate::model::{Candidate, ImportantDateEvent, SourceOrigin};
use chrono::Datelike;

/// Window captured around a tier-2 hit, in characters each side.
pub const CONTEXT_RADIUS: usize = 50;

/// Inputs shorter than this cannot carry a meaningful date plus context.
const MIN_TEXT_LEN: usize = 10;

/// Extracts important-date events from one course's text.
///
/// Tier 1 applies the contextual patterns to keyword-flagged lines only.
/// Tier 2 (bare date shapes over the whole text) runs only when tier 1
/// found nothing for this text; it never adds to existing tier-1 results.
pub fn find_important_dates(
    text: &str,
    course_name: &str,
    origin: SourceOrigin,
    config: &ExtractorConfig,
) -> Vec<ImportantDateEvent> {
    if text.trim().chars().count() < MIN_TEXT_LEN {
        log::debug!("{}: text too short to scan", course_name);
        return Vec::new();
    }

    let mut candidates = contextual_candidates(text, course_name, origin, config);
    let mut from_fallback = false;

    if candidates.is_empty() {
        log::debug!(
            "{}: no contextual matches, falling back to generic date patterns",
            course_name
        );
        candidates = generic_candidates(text, course_name, config);
        from_fallback = true;
    }

    let events: Vec<ImportantDateEvent> = candidates
        .into_iter()
        .filter_map(|c| {
            let date = c.parsed_date?;
            // Tier-1 matches begin with the keyword itself, so the text
            // before the date is separator junk; only fallback context
            // windows carry a usable pre-date label.
            let date_hint = from_fallback.then_some(c.date_text.as_str());
            let title = title::extract_title(&c.context_window, date_hint);
            Some(ImportantDateEvent::new(
                course_name,
                date,
                title,
                &c.context_window,
                &c.raw_match_text,
                config.max_text_len,
            ))
        })
        .collect();

    log::info!("{}: {} date candidates accepted", course_name, events.len());
    events
}

/// Tier 1: contextual patterns over keyword-flagged lines.
fn contextual_candidates(
    text: &str,
    course_name: &str,
    origin: SourceOrigin,
    config: &ExtractorConfig,
) -> Vec<Candidate> {
    let reference = config.reference_date();
    let mut candidates = Vec::new();

    for line in scanner::scan(text, origin, &config.keywords) {
        if !line.has_keyword {
            continue;
        }
        for hit in patterns::contextual_matches(&line.text) {
            let parsed = dates::parse_date(&hit.date_text, reference);
            if parsed.is_none() {
                log::debug!("could not parse date from {:?}", hit.matched_text);
            }
            candidates.push(Candidate {
                course_name: course_name.to_string(),
                context_window: hit.matched_text.clone(),
                raw_match_text: hit.matched_text,
                date_text: hit.date_text,
                parsed_date: parsed,
            });
        }
    }
    candidates.retain(|c| c.parsed_date.is_some());
    candidates
}

/// Tier 2: bare date tokens anywhere in the text, filtered to dates near
/// the reference year so citation years and stray numbers are suppressed.
fn generic_candidates(text: &str, course_name: &str, config: &ExtractorConfig) -> Vec<Candidate> {
    let reference = config.reference_date();
    let mut candidates = Vec::new();

    for hit in patterns::generic_matches(text, CONTEXT_RADIUS) {
        let Some(date) = dates::parse_date(&hit.date_text, reference) else {
            continue;
        };
        let year_diff = (date.year() - reference.year()).abs();
        if year_diff > config.year_window {
            log::debug!(
                "{}: dropping {:?}, {} years from reference",
                course_name,
                hit.date_text,
                year_diff
            );
            continue;
        }
        candidates.push(Candidate {
            course_name: course_name.to_string(),
            raw_match_text: hit.context.clone(),
            context_window: hit.context,
            date_text: hit.date_text,
            parsed_date: Some(date),
        });
    }
    candidates
}
