// File: ./src/config.rs
// Handles extractor configuration loading, saving, and defaults.
use crate::extract::scanner;
use crate::model::MAX_TEXT_LEN;
use crate::paths::AppPaths;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_keywords() -> Vec<String> {
    scanner::default_keywords()
}

fn default_year_window() -> i32 {
    2
}

fn default_max_text_len() -> usize {
    MAX_TEXT_LEN
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Terms that flag a line for contextual pattern matching.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Generic-tier matches are rejected when their year is more than this
    /// many calendar years from the reference date.
    #[serde(default = "default_year_window")]
    pub year_window: i32,

    /// Truncation length for event description and provenance text.
    #[serde(default = "default_max_text_len")]
    pub max_text_len: usize,

    /// Overrides "today" for year inference and the year-window filter.
    /// Mostly useful for tests and replaying archived documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            year_window: 2,
            max_text_len: MAX_TEXT_LEN,
            reference_date: None,
        }
    }
}

impl ExtractorConfig {
    /// The date used for year inference: the configured override, else today.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Load the configuration from disk.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load() -> Result<Self> {
        let path = AppPaths::get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: ExtractorConfig = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<()> {
        let path = AppPaths::get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str).map_err(|e| {
            anyhow::anyhow!("Failed to write config file '{}': {}", path.display(), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let config = ExtractorConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: ExtractorConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.year_window, 2);
        assert_eq!(parsed.max_text_len, MAX_TEXT_LEN);
        assert!(parsed.keywords.contains(&"deadline".to_string()));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: ExtractorConfig = toml::from_str("year_window = 1").unwrap();
        assert_eq!(parsed.year_window, 1);
        assert!(!parsed.keywords.is_empty());
        assert!(parsed.reference_date.is_none());
    }
}
