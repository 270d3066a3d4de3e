//! Error types for day-timeline operations.

use chrono::NaiveDateTime;
use thiserror::Error;

/// A per-entry failure during a layout pass.
///
/// These never abort the pass: the offending entry is dropped and the error is
/// collected in [`DayLayout::rejected`](crate::layout::DayLayout::rejected).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A timed entry whose end is not strictly after its start.
    #[error("Invalid interval for entry '{id}': end {end} is not after start {start}")]
    InvalidInterval {
        id: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Rejected layout configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("hour_height must be a positive finite number, got {0}")]
    HourHeight(f64),

    #[error("gap_px must be a non-negative finite number, got {0}")]
    Gap(f64),

    #[error("Duration thresholds must be non-zero and strictly ascending, got micro={micro} tiny={tiny} small={small}")]
    Thresholds { micro: i64, tiny: i64, small: i64 },
}

/// Crate-level error for fallible entry points (configuration, JSON input).
#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
