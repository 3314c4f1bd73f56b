//! GPU Bench
//!
//! Desktop browser for 3DMark GPU scores. The crate is split into a pure
//! core and an egui front-end:
//! - **error**: Unified error type hierarchy
//! - **models**: Records, score types, filters and modes
//! - **catalog**: Built-in score table, mobile classification, external catalogs
//! - **calculator**: Filtering, sorting, comparison and statistics
//! - **state**: Interaction state and its transitions
//! - **view**: View-models derived from catalog and state
//! - **config**: TOML settings and the changelog
//! - **log_collector**: Background log persistence
//! - **ui**: Controller, effect scheduling and egui rendering

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod log_collector;
pub mod models;
pub mod state;
pub mod ui;
pub mod view;

// ============================================================================
// PUBLIC RE-EXPORTS FOR CONVENIENCE
// ============================================================================

pub use error::{AppError, CatalogError, ConfigError, ValidationError};

pub use models::{Brand, FormFactor, Filter, GpuRecord, Mode, ScoreType, Scores, SortOrder};

pub use catalog::{Catalog, MergeReport};

pub use state::{Action, ComparisonPair, InteractionState};

pub use config::AppConfig;

pub use log_collector::{LogCollector, LogLine};

pub use ui::BrowserController;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
