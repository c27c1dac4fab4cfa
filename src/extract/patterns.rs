// File: src/extract/patterns.rs
// The two pattern tiers of the cascade. Tier 1 pairs a domain keyword with
// an adjacent date token and runs on keyword-flagged lines; tier 2 matches
// bare date-shaped tokens anywhere and is only consulted when tier 1 came
// up empty for a course's text.
use once_cell::sync::Lazy;
use regex::Regex;

/// Tier-1 contextual patterns. Capture group 1 (or the full match when no
/// group is present) is the date substring handed to the date parser.
pub static CONTEXTUAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "Final Exam: December 15, 2024"
        r"(?i)(?:final|midterm|exam|test|quiz)\s+(?:exam|test|quiz)?\s*:?\s*([A-Za-z]+\s+\d{1,2},?\s+\d{4})",
        // "Exam 1 - 10/20/2024"
        r"(?i)(?:exam|test|final|midterm|quiz)\s+\d*\s*[-–]\s*(\d{1,2}/\d{1,2}/\d{2,4})",
        // "12/15/2024 - Final Exam"
        r"(?i)(\d{1,2}/\d{1,2}/\d{2,4})\s*[-–]\s*(?:final|exam|test|midterm|quiz)",
        // "Assignment 1 due: December 15, 2024"
        r"(?i)(?:assignment|homework|hw|project|paper|essay|report)\s+\d*\s*(?:due|deadline)?\s*:?\s*([A-Za-z]+\s+\d{1,2},?\s+\d{4})",
        // "Assignment 1 - 10/20/2024"
        r"(?i)(?:assignment|homework|hw|project|paper|essay|report)\s+\d*\s*[-–]\s*(\d{1,2}/\d{1,2}/\d{2,4})",
        // "Due: December 15, 2024" / "Deadline: 10/20/2024"
        r"(?i)(?:due|deadline|submission)\s*:?\s*([A-Za-z]+\s+\d{1,2},?\s+\d{4}|\d{1,2}/\d{1,2}/\d{2,4})",
        // "Presentation: December 15, 2024"
        r"(?i)(?:presentation|present|demo|demonstration)\s*:?\s*([A-Za-z]+\s+\d{1,2},?\s+\d{4}|\d{1,2}/\d{1,2}/\d{2,4})",
        // "12/15/2024 - Assignment 1"
        r"(?i)(\d{1,2}/\d{1,2}/\d{2,4})\s*[-–]\s*(?:assignment|homework|hw|project|paper|essay|report)",
        // Keyword anywhere before a textual date; year optional, the
        // reference year fills it in at parse time.
        r"(?i)(?:final|exam|test|midterm|quiz|assignment|homework|hw|project|paper|essay|report|presentation|due|deadline).*?([A-Za-z]+\s+\d{1,2}(?:,?\s+\d{4})?)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Tier-2 generic date shapes, scanned across the entire text.
pub static GENERIC_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // MM/DD/YYYY or MM/DD/YY
        r"\b(\d{1,2}/\d{1,2}/\d{2,4})\b",
        // Month DD, YYYY
        r"\b([A-Za-z]+\s+\d{1,2},?\s+\d{4})\b",
        // DD Month YYYY
        r"\b(\d{1,2}\s+[A-Za-z]+\s+\d{4})\b",
        // YYYY-MM-DD
        r"\b(\d{4}-\d{1,2}-\d{1,2})\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// A tier-1 hit: the full matched phrase plus the date substring inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextualHit {
    pub matched_text: String,
    pub date_text: String,
}

/// A tier-2 hit: a bare date token plus surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericHit {
    pub date_text: String,
    pub context: String,
}

/// Runs every tier-1 pattern over one line, unioning the matches.
pub fn contextual_matches(line: &str) -> Vec<ContextualHit> {
    let mut hits = Vec::new();
    for pattern in CONTEXTUAL_PATTERNS.iter() {
        for caps in pattern.captures_iter(line) {
            let full = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
            let date = caps.get(1).map(|m| m.as_str()).unwrap_or(full);
            hits.push(ContextualHit {
                matched_text: full.to_string(),
                date_text: date.to_string(),
            });
        }
    }
    hits
}

/// Runs every tier-2 pattern over the whole text, attaching a ±`radius`
/// character window around each hit.
pub fn generic_matches(text: &str, radius: usize) -> Vec<GenericHit> {
    let mut hits = Vec::new();
    for pattern in GENERIC_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                hits.push(GenericHit {
                    date_text: m.as_str().to_string(),
                    context: context_window(text, m.start(), m.end(), radius),
                });
            }
        }
    }
    hits
}

/// Char-boundary-safe slice of up to `radius` characters either side of a
/// byte-offset match.
fn context_window(text: &str, m_start: usize, m_end: usize, radius: usize) -> String {
    let start = if radius == 0 {
        m_start
    } else {
        text[..m_start]
            .char_indices()
            .rev()
            .nth(radius - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    };
    let end = text[m_end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| m_end + i)
        .unwrap_or(text.len());
    text[start..end].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contextual_exam_pattern() {
        let hits = contextual_matches("Final Exam: December 15, 2024");
        assert!(!hits.is_empty());
        assert_eq!(hits[0].date_text, "December 15, 2024");
    }

    #[test]
    fn test_contextual_dash_assignment() {
        let hits = contextual_matches("Assignment 3 - 10/20/2024");
        assert!(hits.iter().any(|h| h.date_text == "10/20/2024"));
    }

    #[test]
    fn test_generic_window_clipping() {
        let hits = generic_matches("due 10/20/2024 end", 50);
        assert_eq!(hits.len(), 1);
        // Window clips at text bounds without panicking.
        assert_eq!(hits[0].context, "due 10/20/2024 end");
    }
}
