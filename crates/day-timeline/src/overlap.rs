//! Strict-overlap detection and overlap clustering for one day's timed entries.
//!
//! Two intervals overlap when `a.start < b.end && b.start < a.end`. Adjacent
//! intervals (one ends exactly when the other starts) do NOT overlap and are
//! never placed in the same cluster unless a third entry bridges them.

use crate::entry::BusyInterval;

/// A strictly overlapping pair, identified by position in the input slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapPair {
    /// Index of the earlier-listed interval.
    pub a: usize,
    /// Index of the later-listed interval.
    pub b: usize,
    pub overlap_minutes: i64,
}

/// Find every strictly overlapping pair among `intervals`.
///
/// Pairs are reported with `a < b`, in ascending `(a, b)` order.
pub fn find_overlaps(intervals: &[&BusyInterval]) -> Vec<OverlapPair> {
    let mut pairs = Vec::new();

    for (a, first) in intervals.iter().enumerate() {
        for (b, second) in intervals.iter().enumerate().skip(a + 1) {
            if first.overlaps(second) {
                let overlap_start = first.start.max(second.start);
                let overlap_end = first.end.min(second.end);
                pairs.push(OverlapPair {
                    a,
                    b,
                    overlap_minutes: (overlap_end - overlap_start).num_minutes(),
                });
            }
        }
    }

    pairs
}

/// A maximal set of entries connected by a chain of strict overlaps.
///
/// Only lives for the duration of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapCluster {
    /// Member indices in ascending input order.
    pub members: Vec<usize>,
}

impl OverlapCluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether this cluster contains more than one entry.
    pub fn has_overlaps(&self) -> bool {
        self.members.len() > 1
    }
}

/// Result of clustering: the clusters plus a reverse lookup per input index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clustering {
    /// Clusters ordered by their first member's input position.
    pub clusters: Vec<OverlapCluster>,
    /// `cluster_of[i]` is the index into `clusters` holding input `i`.
    pub cluster_of: Vec<usize>,
}

/// Union-find over input indices.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            // Keep the smaller index as the root so roots are stable.
            let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[child] = root;
        }
    }
}

/// Group intervals into connected components of the strict-overlap graph.
pub fn cluster_intervals(intervals: &[&BusyInterval]) -> Clustering {
    let mut set = DisjointSet::new(intervals.len());
    for pair in find_overlaps(intervals) {
        set.union(pair.a, pair.b);
    }

    let mut clusters: Vec<OverlapCluster> = Vec::new();
    let mut cluster_by_root: Vec<Option<usize>> = vec![None; intervals.len()];
    let mut cluster_of = Vec::with_capacity(intervals.len());

    for i in 0..intervals.len() {
        let root = set.find(i);
        let idx = match cluster_by_root[root] {
            Some(idx) => idx,
            None => {
                clusters.push(OverlapCluster {
                    members: Vec::new(),
                });
                cluster_by_root[root] = Some(clusters.len() - 1);
                clusters.len() - 1
            }
        };
        clusters[idx].members.push(i);
        cluster_of.push(idx);
    }

    Clustering {
        clusters,
        cluster_of,
    }
}
