// File: src/model/record.rs
// Structured assignment records, as produced by an LMS API collaborator.
// These bypass text scanning entirely (the timestamps are already machine
// readable) and go straight to the normalizer in `pipeline`.
use serde::Deserialize;

/// The subset of a Canvas-style assignment payload the engine cares about.
/// Unknown fields are ignored so API additions never break ingestion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentRecord {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub due_at: Option<String>,
    pub unlock_at: Option<String>,
    pub lock_at: Option<String>,
    pub course_id: Option<u64>,
    pub points_possible: Option<f64>,
}

impl AssignmentRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Assignment")
    }

    /// True when the record carries no usable timestamp at all.
    pub fn is_dateless(&self) -> bool {
        self.due_at.is_none() && self.unlock_at.is_none() && self.lock_at.is_none()
    }
}

/// Strips HTML tags from an assignment description, collapsing runs of
/// whitespace. Canvas descriptions arrive as HTML fragments.
pub fn strip_html_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
