//! Configuration module for the benchmark browser.
//!
//! # Module Structure
//!
//! - `loader`: locates, loads and saves `config.toml`
//! - `changelog`: application version metadata and release notes
//!
//! Configuration covers presentation timing (search debounce, selection
//! animation), list limits, the initial score type, the log level and an
//! optional external catalog to merge at startup. The interaction state itself
//! is never persisted.

pub mod changelog;
pub mod loader;

pub use changelog::{ChangelogEntry, CHANGELOG};
pub use loader::{get_global_config_path, load_config_from_file, load_or_default, save_config_to_file};

use crate::error::ConfigError;
use crate::models::ScoreType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quiet period before a search edit is applied
    pub search_delay_ms: u64,
    /// Delay before a comparison pick takes effect
    pub animation_duration_ms: u64,
    pub max_display_items: usize,
    pub suggestion_limit: usize,
    pub default_score_type: ScoreType,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Optional brand-grouped JSON catalog merged after the built-in table
    pub extra_catalog: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            search_delay_ms: 300,
            animation_duration_ms: 500,
            max_display_items: 1000,
            suggestion_limit: 5,
            default_score_type: ScoreType::TimeSpy,
            log_level: "info".to_string(),
            extra_catalog: None,
        }
    }
}

impl AppConfig {
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Parsed log level filter
    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level.parse::<log::LevelFilter>().map_err(|_| {
            ConfigError::ValidationFailed(format!("Unknown log level: {}", self.log_level))
        })
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_display_items == 0 {
            return Err(ConfigError::ValidationFailed(
                "max_display_items must be greater than zero".to_string(),
            ));
        }
        if self.suggestion_limit == 0 {
            return Err(ConfigError::ValidationFailed(
                "suggestion_limit must be greater than zero".to_string(),
            ));
        }
        self.level_filter()?;
        Ok(())
    }
}
