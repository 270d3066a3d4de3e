//! Vertical geometry: map a time-of-day interval onto pixel offsets.
//!
//! Geometry depends only on the interval itself and the pixel scale, never on
//! how the entry was clustered.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::entry::BusyInterval;
use crate::error::LayoutError;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Top offset and height of a timed entry, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalGeometry {
    pub top_px: f64,
    pub height_px: f64,
}

/// Fractional hours elapsed since midnight of `time`'s own day.
pub fn hours_since_midnight(time: NaiveDateTime) -> f64 {
    let secs = time.num_seconds_from_midnight() as f64;
    let nanos = time.nanosecond() as f64;
    (secs + nanos / 1e9) / 3600.0
}

/// Compute `top = hoursSinceMidnight(start) * hourHeight` and
/// `height = durationHours * hourHeight - gap`.
///
/// # Errors
/// Returns [`LayoutError::InvalidInterval`] when `end <= start`.
pub fn map_interval(
    interval: &BusyInterval,
    config: &LayoutConfig,
) -> Result<VerticalGeometry, LayoutError> {
    if interval.end <= interval.start {
        return Err(LayoutError::InvalidInterval {
            id: interval.id.clone(),
            start: interval.start,
            end: interval.end,
        });
    }

    let duration_hours = interval.duration_millis() as f64 / MILLIS_PER_HOUR;

    Ok(VerticalGeometry {
        top_px: hours_since_midnight(interval.start) * config.hour_height,
        height_px: duration_hours * config.hour_height - config.gap_px,
    })
}
