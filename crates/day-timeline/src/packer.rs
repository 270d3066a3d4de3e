//! Column assignment within overlap clusters.
//!
//! Members of a cluster are visited in REVERSE input order. Each takes the
//! lowest column not already held by a previously placed member it strictly
//! overlaps. The later an entry appears in the snapshot, the further left it
//! lands. This ordering is part of the output contract: forward order would
//! produce a different (mirrored) arrangement.

use serde::{Deserialize, Serialize};

use crate::entry::BusyInterval;
use crate::overlap::Clustering;

/// Horizontal slot of an entry that shares its cluster with others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPlacement {
    /// Zero-based column index.
    pub column: usize,
    /// Columns used by the whole cluster (max column index + 1).
    pub column_count: usize,
}

impl ColumnPlacement {
    pub fn width_percent(&self) -> f64 {
        100.0 / self.column_count as f64
    }

    pub fn left_percent(&self) -> f64 {
        self.column as f64 * self.width_percent()
    }
}

/// Assign columns to every member of every multi-entry cluster.
///
/// Returns one slot per input interval; singleton clusters get `None` so they
/// render full width with no horizontal attributes.
pub fn assign_columns(
    intervals: &[&BusyInterval],
    clustering: &Clustering,
) -> Vec<Option<ColumnPlacement>> {
    let mut placements = vec![None; intervals.len()];

    for cluster in clustering.clusters.iter().filter(|c| c.has_overlaps()) {
        let mut placed: Vec<(usize, usize)> = Vec::with_capacity(cluster.len());

        for &member in cluster.members.iter().rev() {
            let taken: Vec<usize> = placed
                .iter()
                .filter(|(other, _)| intervals[member].overlaps(intervals[*other]))
                .map(|&(_, column)| column)
                .collect();

            // At most `taken.len()` columns conflict, so one in 0..=len is free.
            let column = (0..=taken.len())
                .find(|c| !taken.contains(c))
                .unwrap_or(taken.len());
            placed.push((member, column));
        }

        let column_count = placed.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;
        for (member, column) in placed {
            placements[member] = Some(ColumnPlacement {
                column,
                column_count,
            });
        }
    }

    placements
}
