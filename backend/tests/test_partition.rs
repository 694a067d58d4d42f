//! Group Partitioner tests
//!
//! Coverage, pin honoring, cluster co-location, capacity and balance on
//! concrete rosters.

use group_assigner_core_rs::{
    assign, partition, resolve, AssignmentError, FixedAssignments, GroupLimits, PartitionResult,
    RngManager, Roster, SizingPolicy,
};
use std::collections::HashSet;

fn roster(names: &[&str]) -> Roster {
    Roster::from_entries(names.iter().copied())
}

fn all_names(result: &PartitionResult) -> Vec<String> {
    result
        .groups
        .iter()
        .flat_map(|g| g.members.iter().cloned())
        .chain(result.unassigned.iter().cloned())
        .collect()
}

#[test]
fn test_coverage_eight_names_two_groups() {
    let roster = roster(&["A", "B", "C", "D", "E", "F", "G", "H"]);
    let outcome = assign(
        &roster,
        &FixedAssignments::None,
        SizingPolicy::ExactGroupCount { groups: 2 },
        &mut RngManager::new(12345),
    )
    .unwrap();
    let result = outcome.result;

    assert_eq!(result.groups.len(), 2);
    assert!(result.unassigned.is_empty());
    assert!(!result.capacity_exceeded);

    let placed: Vec<String> = all_names(&result);
    let unique: HashSet<&String> = placed.iter().collect();
    assert_eq!(placed.len(), 8, "no name duplicated");
    assert_eq!(unique.len(), 8, "no name lost");
    for name in roster.names() {
        assert!(unique.contains(name));
    }
}

#[test]
fn test_pin_honored() {
    let roster = roster(&["A", "B", "C", "D"]);
    let fixed = FixedAssignments::Pins(vec![("A".to_string(), 1)]);

    for seed in 1..30 {
        let outcome = assign(
            &roster,
            &fixed,
            SizingPolicy::ExactGroupCount { groups: 2 },
            &mut RngManager::new(seed),
        )
        .unwrap();

        assert!(outcome.result.groups[0].contains("A"), "seed {}", seed);
        assert_eq!(outcome.result.groups[0].index, 1);
    }
}

#[test]
fn test_cluster_co_located() {
    let roster = roster(&["A", "B", "C", "D", "E", "F"]);
    let fixed = FixedAssignments::Clusters(vec![vec!["A".to_string(), "B".to_string()]]);

    for seed in 1..30 {
        let outcome = assign(
            &roster,
            &fixed,
            SizingPolicy::ExactGroupCount { groups: 2 },
            &mut RngManager::new(seed),
        )
        .unwrap();

        let group_a = outcome.result.group_of("A");
        assert!(group_a.is_some());
        assert_eq!(group_a, outcome.result.group_of("B"), "seed {}", seed);
    }
}

#[test]
fn test_clusters_spread_over_groups_both_ways() {
    // A lone cluster should not always land in the same group
    let roster = roster(&["A", "B", "C", "D", "E", "F"]);
    let fixed = FixedAssignments::Clusters(vec![vec!["A".to_string(), "B".to_string()]]);

    let groups_seen: HashSet<usize> = (1..40)
        .filter_map(|seed| {
            assign(
                &roster,
                &fixed,
                SizingPolicy::ExactGroupCount { groups: 2 },
                &mut RngManager::new(seed),
            )
            .unwrap()
            .result
            .group_of("A")
        })
        .collect();

    assert_eq!(groups_seen.len(), 2);
}

#[test]
fn test_capacity_ten_names_two_by_three() {
    let roster = roster(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
    let outcome = assign(
        &roster,
        &FixedAssignments::None,
        SizingPolicy::BoundedCapacity {
            max_groups: 2,
            max_per_group: 3,
        },
        &mut RngManager::new(7),
    )
    .unwrap();
    let result = outcome.result;

    assert_eq!(result.groups[0].len(), 3);
    assert_eq!(result.groups[1].len(), 3);
    assert_eq!(result.unassigned.len(), 4);
    assert!(result.capacity_exceeded);
    assert_eq!(all_names(&result).len(), 10);
}

#[test]
fn test_balance_ten_names_three_groups() {
    let roster = Roster::from_entries((0..10).map(|i| format!("N{}", i)));
    let outcome = assign(
        &roster,
        &FixedAssignments::None,
        SizingPolicy::ExactGroupCount { groups: 3 },
        &mut RngManager::new(99),
    )
    .unwrap();

    let mut sizes: Vec<usize> = outcome.result.groups.iter().map(|g| g.len()).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![3, 3, 4]);
}

#[test]
fn test_pinned_members_count_toward_target() {
    // Two pins in group 2 of an 8-person, 2-group run: group 2 still ends at 4
    let roster = roster(&["A", "B", "C", "D", "E", "F", "G", "H"]);
    let fixed = FixedAssignments::Pins(vec![("A".to_string(), 2), ("B".to_string(), 2)]);
    let outcome = assign(
        &roster,
        &fixed,
        SizingPolicy::ExactGroupCount { groups: 2 },
        &mut RngManager::new(5),
    )
    .unwrap();

    assert_eq!(outcome.result.groups[0].len(), 4);
    assert_eq!(outcome.result.groups[1].len(), 4);
    assert!(outcome.result.groups[1].contains("A"));
    assert!(outcome.result.groups[1].contains("B"));
}

#[test]
fn test_bounded_pins_resolved_against_capacity() {
    let roster = roster(&["A", "B", "C", "D", "E"]);
    let fixed = FixedAssignments::Pins(vec![
        ("A".to_string(), 1),
        ("B".to_string(), 1),
        ("C".to_string(), 3),
    ]);
    let outcome = assign(
        &roster,
        &fixed,
        SizingPolicy::BoundedCapacity {
            max_groups: 2,
            max_per_group: 1,
        },
        &mut RngManager::new(21),
    )
    .unwrap();

    assert_eq!(outcome.conflicts.len(), 2, "B hits a full group, C a missing one");
    assert_eq!(outcome.result.groups[0].members, vec!["A".to_string()]);
    assert_eq!(outcome.result.groups[1].len(), 1);
    assert_eq!(outcome.result.unassigned.len(), 3);
}

#[test]
fn test_partition_with_resolved_constraints() {
    let roster = roster(&["A", "B", "C", "D", "E", "F"]);
    let fixed = FixedAssignments::Pins(vec![("F".to_string(), 3)]);
    let resolved = resolve(&roster, &fixed, Some(GroupLimits::new(3, None)));

    let result = partition(
        &roster,
        &resolved,
        SizingPolicy::ExactGroupCount { groups: 3 },
        &mut RngManager::new(8),
    )
    .unwrap();

    assert!(result.groups[2].contains("F"));
    assert!(result.groups.iter().all(|g| g.len() == 2));
}

#[test]
fn test_internal_order_shuffled() {
    // With one group every name lands there; display order should vary by seed
    let roster = Roster::from_entries((0..8).map(|i| format!("N{}", i)));
    let orders: HashSet<Vec<String>> = (1..10)
        .map(|seed| {
            assign(
                &roster,
                &FixedAssignments::None,
                SizingPolicy::ExactGroupCount { groups: 1 },
                &mut RngManager::new(seed),
            )
            .unwrap()
            .result
            .groups[0]
                .members
                .clone()
        })
        .collect();

    assert!(orders.len() > 1);
}

#[test]
fn test_zero_group_count_is_configuration_error() {
    let err = assign(
        &roster(&["A", "B"]),
        &FixedAssignments::None,
        SizingPolicy::ExactGroupCount { groups: 0 },
        &mut RngManager::new(1),
    )
    .unwrap_err();

    assert!(matches!(err, AssignmentError::InvalidSizing(_)));
    assert!(err.is_configuration_error());
}

#[test]
fn test_empty_roster_is_configuration_error() {
    let err = assign(
        &Roster::from_text("\n  \n"),
        &FixedAssignments::None,
        SizingPolicy::ExactGroupCount { groups: 2 },
        &mut RngManager::new(1),
    )
    .unwrap_err();

    assert!(matches!(err, AssignmentError::EmptyRoster));
}
