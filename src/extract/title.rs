// File: src/extract/title.rs
// Derives a short human-readable label for a matched date. Most specific
// derivation wins: keyword + qualifier ("Assignment 3" -> "3"), then the
// text preceding the date, then the bare keyword, then a fixed default.
use crate::model::DEFAULT_TITLE;
use once_cell::sync::Lazy;
use regex::Regex;

static QUALIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:final|midterm|exam|test|quiz|assignment|homework|hw|project|paper|essay|report|presentation|due|deadline)\s+(\d+|[\w\s]+?)(?:\s*[-–:]|$)",
    )
    .unwrap()
});

static KEYWORD_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(final|midterm|exam|test|quiz|assignment|homework|hw|project|paper|essay|report|presentation|due|deadline)",
    )
    .unwrap()
});

pub fn extract_title(text: &str, date_text: Option<&str>) -> String {
    if let Some(caps) = QUALIFIER.captures(text) {
        let qualifier = caps[1].trim();
        if !qualifier.is_empty() {
            return qualifier.to_string();
        }
    }

    // Text before the date substring, when it is short enough to be a label.
    if let Some(date_text) = date_text
        && !date_text.is_empty()
        && let Some(before) = text.split(date_text).next()
    {
        let before = before.trim();
        let len = before.chars().count();
        if (1..50).contains(&len) {
            return before.to_string();
        }
    }

    if let Some(caps) = KEYWORD_ONLY.captures(text) {
        return capitalize(&caps[1]);
    }

    DEFAULT_TITLE.to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
