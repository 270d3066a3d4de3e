//! # day-timeline
//!
//! Deterministic single-day calendar layout.
//!
//! Turns a snapshot of timed and all-day calendar entries into render
//! descriptors: pixel geometry on a vertical time axis, column placement for
//! overlapping entries, and duration classes. Every pass is a pure function of
//! the snapshot, so re-running it on every change always yields the same output.
//!
//! ## Modules
//!
//! - [`entry`] — Calendar entries, day ids and snapshots (serde wire shape)
//! - [`config`] — Pixel scale and duration thresholds
//! - [`geometry`] — Time-of-day interval → top/height in pixels
//! - [`overlap`] — Strict-overlap detection and transitive clustering
//! - [`packer`] — Reverse-order column assignment within clusters
//! - [`classify`] — Partial-hour duration buckets
//! - [`descriptor`] — Render descriptors, CSS classes and hrefs
//! - [`layout`] — The layout engine tying the above together
//! - [`feed`] — Per-day snapshot subscriptions
//! - [`view`] — Single-day view lifecycle on top of a feed
//! - [`error`] — Error types

pub mod classify;
pub mod config;
pub mod descriptor;
pub mod entry;
pub mod error;
pub mod feed;
pub mod geometry;
pub mod layout;
pub mod overlap;
pub mod packer;
pub mod view;

pub use classify::{classify_duration, DurationClass, PartialBucket};
pub use config::{DurationThresholds, LayoutConfig};
pub use descriptor::{build_href, parse_href, ClassList, RenderDescriptor};
pub use entry::{BusyInterval, CalendarEntry, DayId, DaySnapshot, EventMeta};
pub use error::{ConfigError, LayoutError, TimelineError};
pub use feed::{DayEventFeed, Listener};
pub use geometry::{map_interval, VerticalGeometry};
pub use layout::{layout_day, DayLayout, LayoutEngine};
pub use overlap::{cluster_intervals, find_overlaps, Clustering, OverlapCluster};
pub use packer::{assign_columns, ColumnPlacement};
pub use view::{DayLabeler, DayView, EnglishDayLabeler};

/// Parse a JSON snapshot and lay it out.
///
/// # Errors
/// Returns [`TimelineError::Json`] for malformed input and
/// [`TimelineError::Config`] for an invalid configuration.
pub fn layout_json(snapshot_json: &str, config: &LayoutConfig) -> error::Result<DayLayout> {
    let snapshot: DaySnapshot = serde_json::from_str(snapshot_json)?;
    Ok(layout_day(&snapshot, config)?)
}
