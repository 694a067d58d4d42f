//! Constraint Resolver tests
//!
//! Covers roster filtering, capacity-aware pin dropping, first-seen-wins
//! precedence and idempotence.

use group_assigner_core_rs::{
    resolve, ConstraintConflict, FixedAssignments, FixedCluster, FixedPin, GroupLimits, Roster,
};

fn roster(names: &[&str]) -> Roster {
    Roster::from_entries(names.iter().copied())
}

fn pins(raw: &[(&str, i64)]) -> FixedAssignments {
    FixedAssignments::Pins(raw.iter().map(|(n, g)| (n.to_string(), *g)).collect())
}

fn clusters(raw: Vec<Vec<&str>>) -> FixedAssignments {
    FixedAssignments::Clusters(
        raw.into_iter()
            .map(|c| c.into_iter().map(String::from).collect())
            .collect(),
    )
}

#[test]
fn test_unknown_pin_names_dropped() {
    let resolved = resolve(&roster(&["A", "B"]), &pins(&[("A", 1), ("X", 2)]), None);

    assert_eq!(resolved.pins, vec![FixedPin::new("A", 1)]);
    assert_eq!(
        resolved.conflicts,
        vec![ConstraintConflict::UnknownName { name: "X".into() }]
    );
}

#[test]
fn test_pin_beyond_max_groups_dropped() {
    let limits = GroupLimits::new(2, Some(3));
    let resolved = resolve(&roster(&["A", "B"]), &pins(&[("A", 3), ("B", 2)]), Some(limits));

    assert_eq!(resolved.pins, vec![FixedPin::new("B", 2)]);
    assert_eq!(
        resolved.conflicts,
        vec![ConstraintConflict::GroupOutOfRange {
            name: "A".into(),
            group: 3
        }]
    );
}

#[test]
fn test_pins_to_full_group_first_seen_wins() {
    let limits = GroupLimits::new(2, Some(2));
    let resolved = resolve(
        &roster(&["A", "B", "C", "D"]),
        &pins(&[("A", 1), ("B", 1), ("C", 1), ("D", 2)]),
        Some(limits),
    );

    assert_eq!(
        resolved.pins,
        vec![
            FixedPin::new("A", 1),
            FixedPin::new("B", 1),
            FixedPin::new("D", 2)
        ]
    );
    assert_eq!(
        resolved.conflicts,
        vec![ConstraintConflict::GroupFull {
            name: "C".into(),
            group: 1
        }]
    );
}

#[test]
fn test_duplicate_pin_first_seen_wins() {
    let resolved = resolve(&roster(&["A", "B"]), &pins(&[("A", 2), ("A", 1)]), None);

    assert_eq!(resolved.pins, vec![FixedPin::new("A", 2)]);
    assert_eq!(
        resolved.conflicts,
        vec![ConstraintConflict::DuplicatePin {
            name: "A".into(),
            kept_group: 2,
            dropped_group: 1
        }]
    );
}

#[test]
fn test_repeat_pin_to_missing_group_reported_as_duplicate() {
    let limits = GroupLimits::new(2, None);
    let resolved = resolve(
        &roster(&["A", "B"]),
        &pins(&[("A", 1), ("A", 5), ("A", -1)]),
        Some(limits),
    );

    assert_eq!(resolved.pins, vec![FixedPin::new("A", 1)]);
    assert_eq!(
        resolved.conflicts,
        vec![
            ConstraintConflict::DuplicatePin {
                name: "A".into(),
                kept_group: 1,
                dropped_group: 5
            },
            ConstraintConflict::DuplicatePin {
                name: "A".into(),
                kept_group: 1,
                dropped_group: -1
            },
        ]
    );
}

#[test]
fn test_placed_names_and_map_for_pins() {
    let resolved = resolve(
        &roster(&["A", "B", "C"]),
        &pins(&[("C", 2), ("A", 1)]),
        Some(GroupLimits::new(2, None)),
    );

    assert_eq!(resolved.placed_names(), vec!["C", "A"]);
    let map = resolved.placement_map();
    assert_eq!(map.get(&1), Some(&vec!["A".to_string()]));
    assert_eq!(map.get(&2), Some(&vec!["C".to_string()]));
}

#[test]
fn test_clusters_filtered_to_roster() {
    let resolved = resolve(
        &roster(&["A", "B", "C"]),
        &clusters(vec![vec!["A", "X"], vec!["Y", "Z"], vec!["B", "C"]]),
        None,
    );

    assert_eq!(
        resolved.clusters,
        vec![FixedCluster::new(["A"]), FixedCluster::new(["B", "C"])]
    );
    assert_eq!(resolved.conflicts.len(), 3);
}

#[test]
fn test_empty_raw_cluster_dropped_silently() {
    let resolved = resolve(&roster(&["A"]), &clusters(vec![vec![], vec!["A"]]), None);

    assert_eq!(resolved.clusters, vec![FixedCluster::new(["A"])]);
    assert!(resolved.conflicts.is_empty());
}

#[test]
fn test_overlapping_clusters_first_seen_wins() {
    let resolved = resolve(
        &roster(&["A", "B", "C", "D"]),
        &clusters(vec![vec!["A", "B"], vec!["B", "C"], vec!["A"]]),
        None,
    );

    assert_eq!(
        resolved.clusters,
        vec![FixedCluster::new(["A", "B"]), FixedCluster::new(["C"])]
    );
    assert_eq!(
        resolved.conflicts,
        vec![
            ConstraintConflict::OverlappingCluster {
                name: "B".into(),
                kept_cluster: 0,
                dropped_cluster: 1
            },
            ConstraintConflict::OverlappingCluster {
                name: "A".into(),
                kept_cluster: 0,
                dropped_cluster: 2
            },
        ]
    );
}

#[test]
fn test_resolution_is_idempotent() {
    let roster = roster(&["A", "B", "C", "D", "E"]);
    let raw = pins(&[("A", 1), ("B", 1), ("Q", 2), ("C", 9), ("A", 2)]);
    let limits = Some(GroupLimits::new(2, Some(1)));

    let first = resolve(&roster, &raw, limits);
    let second = resolve(&roster, &raw, limits);

    assert_eq!(first, second);
}

#[test]
fn test_conflict_messages_readable() {
    let resolved = resolve(&roster(&["A"]), &pins(&[("A", 5)]), Some(GroupLimits::new(2, None)));

    assert_eq!(
        resolved.conflicts[0].to_string(),
        "pin of 'A' to group 5 is out of range"
    );
}
