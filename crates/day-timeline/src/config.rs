//! Static layout configuration, supplied when the engine is constructed.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bounds (exclusive, in minutes) of the partial-duration buckets.
///
/// A non-hour duration below `micro` is "micro", in `[micro, tiny)` is "tiny",
/// in `[tiny, small)` is "small", and anything from `small` up gets only the
/// base partial class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationThresholds {
    pub micro: i64,
    pub tiny: i64,
    pub small: i64,
}

impl Default for DurationThresholds {
    fn default() -> Self {
        Self {
            micro: 18,
            tiny: 30,
            small: 45,
        }
    }
}

/// Pixel scale and classification thresholds for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixels per hour on the vertical axis.
    pub hour_height: f64,
    /// Visual seam subtracted from every timed entry's height.
    pub gap_px: f64,
    pub thresholds: DurationThresholds,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hour_height: 50.0,
            gap_px: 0.1,
            thresholds: DurationThresholds::default(),
        }
    }
}

impl LayoutConfig {
    pub fn with_hour_height(hour_height: f64) -> Self {
        Self {
            hour_height,
            ..Self::default()
        }
    }

    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.hour_height.is_finite() || self.hour_height <= 0.0 {
            return Err(ConfigError::HourHeight(self.hour_height));
        }
        if !self.gap_px.is_finite() || self.gap_px < 0.0 {
            return Err(ConfigError::Gap(self.gap_px));
        }
        let DurationThresholds { micro, tiny, small } = self.thresholds;
        if micro <= 0 || micro >= tiny || tiny >= small {
            return Err(ConfigError::Thresholds { micro, tiny, small });
        }
        Ok(())
    }
}
