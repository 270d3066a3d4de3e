//! Tests for strict-overlap detection, clustering and column packing.

mod common;

use common::record;
use day_timeline::{assign_columns, cluster_intervals, find_overlaps, BusyInterval, CalendarEntry};

fn intervals(entries: &[CalendarEntry]) -> Vec<&BusyInterval> {
    entries.iter().map(|e| &e.interval).collect()
}

#[test]
fn two_overlapping_intervals_detected() {
    // 09:00-10:00 and 09:30-10:30 → 30-min overlap
    let entries = vec![
        record("A", "9:00", "10:00", 0),
        record("B", "9:30", "10:30", 0),
    ];

    let pairs = find_overlaps(&intervals(&entries));

    assert_eq!(pairs.len(), 1);
    assert_eq!((pairs[0].a, pairs[0].b), (0, 1));
    assert_eq!(pairs[0].overlap_minutes, 30);
}

#[test]
fn adjacent_intervals_do_not_overlap() {
    let entries = vec![
        record("Lorem Ipsum", "5:00", "6:00", 0),
        record("Maecennas", "6:00", "17:00", 1),
    ];

    assert!(find_overlaps(&intervals(&entries)).is_empty());

    let clustering = cluster_intervals(&intervals(&entries));
    assert_eq!(clustering.clusters.len(), 2);
    assert!(clustering.clusters.iter().all(|c| !c.has_overlaps()));
}

#[test]
fn clustering_is_transitive() {
    // A overlaps B, B overlaps C, A and C do not touch.
    let entries = vec![
        record("A", "9:00", "10:00", 0),
        record("B", "9:30", "11:00", 0),
        record("C", "10:30", "12:00", 0),
        record("D", "13:00", "14:00", 0),
    ];

    let clustering = cluster_intervals(&intervals(&entries));

    assert_eq!(clustering.clusters.len(), 2);
    assert_eq!(clustering.clusters[0].members, vec![0, 1, 2]);
    assert_eq!(clustering.clusters[1].members, vec![3]);
    assert_eq!(clustering.cluster_of, vec![0, 0, 0, 1]);
}

#[test]
fn cluster_members_keep_input_order_when_bridge_is_listed_last() {
    let entries = vec![
        record("A", "9:00", "10:00", 0),
        record("C", "11:00", "12:00", 0),
        record("Bridge", "9:30", "11:30", 0),
    ];

    let clustering = cluster_intervals(&intervals(&entries));

    assert_eq!(clustering.clusters.len(), 1);
    assert_eq!(clustering.clusters[0].members, vec![0, 1, 2]);
}

#[test]
fn reverse_order_packing_puts_later_entries_left() {
    let entries = vec![
        record("Dolor Amet", "4:00", "6:00", 1),
        record("Lorem Ipsum", "5:00", "6:00", 0),
    ];
    let ivs = intervals(&entries);
    let placements = assign_columns(&ivs, &cluster_intervals(&ivs));

    let dolor = placements[0].unwrap();
    let lorem = placements[1].unwrap();
    assert_eq!((dolor.column, dolor.column_count), (1, 2));
    assert_eq!((lorem.column, lorem.column_count), (0, 2));
    assert_eq!(dolor.left_percent(), 50.0);
    assert_eq!(lorem.left_percent(), 0.0);
    assert_eq!(lorem.width_percent(), 50.0);
}

#[test]
fn reverse_order_packing_skips_interleaved_entries() {
    let entries = vec![
        record("A", "9:00", "10:00", 0),
        record("X", "15:00", "16:00", 0),
        record("B", "9:30", "10:30", 0),
    ];
    let ivs = intervals(&entries);
    let clustering = cluster_intervals(&ivs);
    let placements = assign_columns(&ivs, &clustering);

    assert_eq!(clustering.clusters[0].members, vec![0, 2]);
    let a = placements[0].unwrap();
    let b = placements[2].unwrap();
    assert_eq!((b.column, b.column_count), (0, 2));
    assert_eq!((a.column, a.column_count), (1, 2));
    assert!(placements[1].is_none());
}

#[test]
fn non_overlapping_cluster_members_share_a_column() {
    // B bridges A and C; A and C can reuse the same column.
    let entries = vec![
        record("A", "9:00", "10:00", 0),
        record("B", "9:30", "11:00", 0),
        record("C", "10:30", "12:00", 0),
    ];
    let ivs = intervals(&entries);
    let placements = assign_columns(&ivs, &cluster_intervals(&ivs));

    // Visited C, B, A: C→0, B→1, A→0.
    let columns: Vec<usize> = placements.iter().map(|p| p.unwrap().column).collect();
    assert_eq!(columns, vec![0, 1, 0]);
    assert!(placements.iter().all(|p| p.unwrap().column_count == 2));
}

#[test]
fn three_way_overlap_uses_three_columns() {
    let entries = vec![
        record("A", "9:00", "12:00", 0),
        record("B", "10:00", "11:00", 0),
        record("C", "10:30", "11:30", 0),
    ];
    let ivs = intervals(&entries);
    let placements = assign_columns(&ivs, &cluster_intervals(&ivs));

    let columns: Vec<usize> = placements.iter().map(|p| p.unwrap().column).collect();
    assert_eq!(columns, vec![2, 1, 0]);

    let a = placements[0].unwrap();
    assert!((a.width_percent() - 100.0 / 3.0).abs() < 1e-9);
    assert!((a.left_percent() - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn singletons_get_no_placement() {
    let entries = vec![
        record("A", "9:00", "10:00", 0),
        record("B", "9:30", "10:30", 0),
        record("Alone", "15:00", "16:00", 0),
    ];
    let ivs = intervals(&entries);
    let placements = assign_columns(&ivs, &cluster_intervals(&ivs));

    assert!(placements[0].is_some());
    assert!(placements[1].is_some());
    assert!(placements[2].is_none());
}

#[test]
fn empty_input_yields_nothing() {
    let clustering = cluster_intervals(&[]);
    assert!(clustering.clusters.is_empty());
    assert!(assign_columns(&[], &clustering).is_empty());
}
