// File: src/extract/scanner.rs
// Splits raw course text into lines and flags the ones worth scanning
// first. Expensive pattern matching is restricted to flagged lines; the
// generic fallback tier still sees everything.
use crate::model::SourceOrigin;

/// Terms that mark a line as likely to carry a calendar-worthy date.
pub const IMPORTANT_KEYWORDS: &[&str] = &[
    // Exams and assessments
    "final exam",
    "midterm exam",
    "exam",
    "test",
    "quiz",
    "final",
    "midterm",
    "assessment",
    "examination",
    "proctored exam",
    // Assignments and projects
    "assignment",
    "homework",
    "hw",
    "project",
    "paper",
    "essay",
    "report",
    "due date",
    "due",
    "deadline",
    "submission",
    // Presentations and activities
    "presentation",
    "present",
    "demo",
    "demonstration",
    // Course activities
    "lab",
    "laboratory",
    "workshop",
    "discussion",
    "recitation",
    // Administrative dates
    "drop date",
    "withdrawal",
    "add/drop",
    "registration",
    "holiday",
    "no class",
    "class cancelled",
    "break",
];

/// One unit of text produced by `scan`, with its keyword flag precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub has_keyword: bool,
}

/// Case-insensitive substring check against a keyword set.
pub fn contains_keyword(text: &str, keywords: &[String]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k.as_str()))
}

/// Splits `text` into scannable lines. HTML-extracted text is split on
/// sentence periods as well as newlines; PDF-extracted text is noisier
/// (headers, column reflow) and is split on newlines only, since periods
/// there frequently belong to section numbers and abbreviations.
pub fn scan(text: &str, origin: SourceOrigin, keywords: &[String]) -> Vec<Line> {
    let pieces: Vec<&str> = match origin {
        SourceOrigin::Html => text.split(['.', '\n']).collect(),
        SourceOrigin::Pdf => text.split('\n').collect(),
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| Line {
            text: p.to_string(),
            has_keyword: contains_keyword(p, keywords),
        })
        .collect()
}

/// The default keyword set as owned strings, for config defaults.
pub fn default_keywords() -> Vec<String> {
    IMPORTANT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_flagging() {
        let keywords = default_keywords();
        let lines = scan(
            "Welcome to the course.\nFinal Exam: December 15, 2024\nOffice hours by appointment",
            SourceOrigin::Html,
            &keywords,
        );
        let flagged: Vec<_> = lines.iter().filter(|l| l.has_keyword).collect();
        assert_eq!(flagged.len(), 1);
        assert!(flagged[0].text.contains("Final Exam"));
    }

    #[test]
    fn test_pdf_split_ignores_periods() {
        let keywords = default_keywords();
        let text = "Sec. 3.1 Homework due Oct. 20";
        // HTML origin fragments on the periods; PDF origin keeps the line whole.
        let html = scan(text, SourceOrigin::Html, &keywords);
        let pdf = scan(text, SourceOrigin::Pdf, &keywords);
        assert!(html.len() > 1);
        assert_eq!(pdf.len(), 1);
        assert!(pdf[0].has_keyword);
    }
}
