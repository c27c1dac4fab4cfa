// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod extract;
pub mod model;
pub mod paths;
pub mod pipeline;

pub use config::ExtractorConfig;
pub use model::{AssignmentRecord, ImportantDateEvent, RawSource, SourceOrigin};
