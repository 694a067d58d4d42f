//! Constraint Resolver
//!
//! Normalizes fixed assignments against the roster before partitioning:
//! - Drops pins and cluster members naming people who are not in the roster
//! - Drops pins to groups that do not exist or are already full of pins
//! - Applies first-seen-wins to duplicate pins and overlapping clusters
//!
//! Every dropped item is returned as a `ConstraintConflict` and logged.
//!
//! # Critical Invariants
//!
//! 1. **Deterministic**: no randomness; same roster + input → same output
//! 2. **Roster-filtered**: every surviving name is in the roster
//! 3. **Single placement**: a name is pinned at most once and sits in at most one cluster

use crate::config::FixedAssignments;
use crate::models::{ConstraintConflict, FixedCluster, FixedPin, GroupLimits, Roster};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Fixed assignments after normalization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConstraints {
    /// Surviving pins in input order
    pub pins: Vec<FixedPin>,

    /// Surviving, non-empty clusters in input order
    pub clusters: Vec<FixedCluster>,

    /// Everything that was dropped, in the order it was found
    pub conflicts: Vec<ConstraintConflict>,
}

impl ResolvedConstraints {
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty() && self.clusters.is_empty()
    }

    /// Names already placed by a pin or cluster
    pub fn placed_names(&self) -> Vec<&str> {
        self.pins
            .iter()
            .map(|p| p.name.as_str())
            .chain(
                self.clusters
                    .iter()
                    .flat_map(|c| c.members.iter().map(String::as_str)),
            )
            .collect()
    }

    /// Pinned names keyed by 1-based group index
    pub fn placement_map(&self) -> BTreeMap<usize, Vec<String>> {
        let mut map: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for pin in &self.pins {
            map.entry(pin.group).or_default().push(pin.name.clone());
        }
        map
    }
}

/// Resolve raw fixed assignments against a roster
///
/// `limits` is the group count and cap of the run, when known. Without it,
/// pins are only checked for a positive group index.
///
/// # Example
///
/// ```rust
/// use group_assigner_core_rs::{resolve, FixedAssignments, GroupLimits, Roster};
///
/// let roster = Roster::from_entries(["Ana", "Budi", "Citra"]);
/// let fixed = FixedAssignments::Pins(vec![
///     ("Ana".into(), 1),
///     ("Dewi".into(), 1),  // not in roster
///     ("Budi".into(), 3),  // only two groups
/// ]);
///
/// let resolved = resolve(&roster, &fixed, Some(GroupLimits::new(2, None)));
/// assert_eq!(resolved.pins.len(), 1);
/// assert_eq!(resolved.conflicts.len(), 2);
/// ```
pub fn resolve(
    roster: &Roster,
    raw: &FixedAssignments,
    limits: Option<GroupLimits>,
) -> ResolvedConstraints {
    let resolved = match raw {
        FixedAssignments::None => ResolvedConstraints::default(),
        FixedAssignments::Pins(pins) => resolve_pins(roster, pins, limits),
        FixedAssignments::Clusters(clusters) => resolve_clusters(roster, clusters),
    };

    for conflict in &resolved.conflicts {
        warn!(%conflict, "Fixed assignment dropped");
    }
    debug!(
        pins = resolved.pins.len(),
        clusters = resolved.clusters.len(),
        conflicts = resolved.conflicts.len(),
        "Resolved fixed assignments"
    );

    resolved
}

fn resolve_pins(
    roster: &Roster,
    raw_pins: &[(String, i64)],
    limits: Option<GroupLimits>,
) -> ResolvedConstraints {
    let mut resolved = ResolvedConstraints::default();
    let mut pinned_to: HashMap<String, usize> = HashMap::new();
    let mut pins_per_group: HashMap<usize, usize> = HashMap::new();

    for (raw_name, raw_group) in raw_pins {
        let name = raw_name.trim();

        if !roster.contains(name) {
            resolved.conflicts.push(ConstraintConflict::UnknownName {
                name: name.to_string(),
            });
            continue;
        }

        if let Some(&kept_group) = pinned_to.get(name) {
            resolved.conflicts.push(ConstraintConflict::DuplicatePin {
                name: name.to_string(),
                kept_group,
                dropped_group: *raw_group,
            });
            continue;
        }

        let group = match usize::try_from(*raw_group) {
            Ok(group) if group >= 1 && limits.map_or(true, |l| l.contains_group(group)) => group,
            _ => {
                resolved.conflicts.push(ConstraintConflict::GroupOutOfRange {
                    name: name.to_string(),
                    group: *raw_group,
                });
                continue;
            }
        };

        let count = pins_per_group.entry(group).or_insert(0);
        if let Some(cap) = limits.and_then(|l| l.max_per_group) {
            if *count >= cap {
                resolved.conflicts.push(ConstraintConflict::GroupFull {
                    name: name.to_string(),
                    group,
                });
                continue;
            }
        }

        *count += 1;
        pinned_to.insert(name.to_string(), group);
        resolved.pins.push(FixedPin::new(name, group));
    }

    resolved
}

fn resolve_clusters(roster: &Roster, raw_clusters: &[Vec<String>]) -> ResolvedConstraints {
    let mut resolved = ResolvedConstraints::default();
    let mut owner: HashMap<String, usize> = HashMap::new();

    for (position, raw_cluster) in raw_clusters.iter().enumerate() {
        let mut members = Vec::new();

        for raw_name in raw_cluster {
            let name = raw_name.trim();

            if !roster.contains(name) {
                resolved.conflicts.push(ConstraintConflict::UnknownName {
                    name: name.to_string(),
                });
                continue;
            }

            if let Some(&kept_cluster) = owner.get(name) {
                resolved.conflicts.push(ConstraintConflict::OverlappingCluster {
                    name: name.to_string(),
                    kept_cluster,
                    dropped_cluster: position,
                });
                continue;
            }

            owner.insert(name.to_string(), position);
            members.push(name.to_string());
        }

        if !members.is_empty() {
            resolved.clusters.push(FixedCluster { members });
        }
    }

    resolved
}
