// File: ./src/model/mod.rs
pub mod event;
pub mod record;

pub use event::{
    Candidate, DateKind, ImportantDateEvent, RawSource, SourceOrigin, DEFAULT_TITLE,
    MAX_EVENT_YEAR, MAX_TEXT_LEN, MIN_EVENT_YEAR,
};
pub use record::AssignmentRecord;
