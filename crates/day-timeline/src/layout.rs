//! The day timeline layout engine.
//!
//! A pass is a pure function of the snapshot and the static configuration:
//! geometry -> clustering/packing -> classification -> assembly over the timed
//! entries, and assembly alone over the all-day entries. Output order always
//! matches snapshot order.

use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, warn};

use crate::classify::classify_duration;
use crate::config::LayoutConfig;
use crate::descriptor::{assemble_allday, assemble_timed, RenderDescriptor};
use crate::entry::{BusyInterval, CalendarEntry, DaySnapshot};
use crate::error::{ConfigError, LayoutError};
use crate::geometry::{map_interval, VerticalGeometry};
use crate::overlap::cluster_intervals;
use crate::packer::assign_columns;

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DayLayout {
    /// Descriptors for timed entries, in snapshot order.
    pub timed: Vec<RenderDescriptor>,
    /// Descriptors for all-day entries, in snapshot order.
    pub allday: Vec<RenderDescriptor>,
    /// Timed entries that could not be laid out. They take no part in
    /// clustering and have no descriptor.
    /// Serialized as their messages; not read back when deserializing.
    #[serde(serialize_with = "serialize_rejected", skip_deserializing)]
    pub rejected: Vec<LayoutError>,
}

fn serialize_rejected<S: Serializer>(
    rejected: &[LayoutError],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(rejected.iter().map(|e| e.to_string()))
}

impl DayLayout {
    pub fn is_empty(&self) -> bool {
        self.timed.is_empty() && self.allday.is_empty()
    }
}

/// Stateless layout engine bound to a validated configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }
}

impl LayoutEngine {
    /// # Errors
    /// Returns the [`ConfigError`] reported by [`LayoutConfig::validate`].
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out a full day from a complete snapshot.
    pub fn layout(&self, snapshot: &DaySnapshot) -> DayLayout {
        let mut rejected = Vec::new();

        // Geometry first: it also screens out invalid intervals before they
        // can join a cluster.
        let mut valid: Vec<(&CalendarEntry, VerticalGeometry)> =
            Vec::with_capacity(snapshot.timed.len());
        for entry in &snapshot.timed {
            match map_interval(&entry.interval, &self.config) {
                Ok(geometry) => valid.push((entry, geometry)),
                Err(err) => {
                    warn!(id = %entry.id(), error = %err, "Skipping timed entry");
                    rejected.push(err);
                }
            }
        }

        let intervals: Vec<&BusyInterval> = valid.iter().map(|(e, _)| &e.interval).collect();
        let clustering = cluster_intervals(&intervals);
        let placements = assign_columns(&intervals, &clustering);

        let timed: Vec<RenderDescriptor> = valid
            .iter()
            .zip(placements)
            .map(|(&(entry, geometry), placement)| {
                let duration =
                    classify_duration(entry.interval.duration_minutes(), &self.config.thresholds);
                assemble_timed(entry, geometry, placement, duration)
            })
            .collect();

        let allday: Vec<RenderDescriptor> = snapshot.allday.iter().map(assemble_allday).collect();

        debug!(
            timed = timed.len(),
            allday = allday.len(),
            clusters = clustering.clusters.len(),
            rejected = rejected.len(),
            "Laid out day"
        );

        DayLayout {
            timed,
            allday,
            rejected,
        }
    }
}

/// Lay out a snapshot with the given configuration.
///
/// # Errors
/// Returns a [`ConfigError`] if the configuration is invalid. Per-entry
/// failures are reported in [`DayLayout::rejected`] instead.
pub fn layout_day(snapshot: &DaySnapshot, config: &LayoutConfig) -> Result<DayLayout, ConfigError> {
    Ok(LayoutEngine::new(*config)?.layout(snapshot))
}
