//! Partition engine
//!
//! Mutable fill state for one run. Built, filled and consumed inside
//! `run`; callers only ever see the finished `PartitionResult`.

use crate::error::{AssignmentError, AssignmentResult};
use crate::models::{FixedCluster, FixedPin, Group, GroupLimits, PartitionResult, Roster};
use crate::resolver::ResolvedConstraints;
use crate::rng::Shuffler;
use std::collections::HashMap;
use tracing::{debug, warn};

struct Fill<'a> {
    limits: GroupLimits,

    /// Members per group, indexed 0-based
    groups: Vec<Vec<String>>,

    /// Roster occurrences not yet placed anywhere
    remaining: HashMap<&'a str, usize>,

    /// Cluster members that did not fit beside their cluster; filled like free names
    spilled: Vec<String>,

    unassigned: Vec<String>,
}

impl<'a> Fill<'a> {
    fn new(roster: &'a Roster, limits: GroupLimits) -> Self {
        Self {
            limits,
            groups: vec![Vec::new(); limits.num_groups],
            remaining: roster.occurrences(),
            spilled: Vec::new(),
            unassigned: Vec::new(),
        }
    }

    /// Claim one roster occurrence of `name`; false if none is left.
    fn take(&mut self, name: &str) -> bool {
        match self.remaining.get_mut(name) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    fn room(&self, idx: usize) -> usize {
        match self.limits.max_per_group {
            Some(cap) => cap.saturating_sub(self.groups[idx].len()),
            None => usize::MAX,
        }
    }

    fn place_pins(&mut self, pins: &[FixedPin]) {
        for pin in pins {
            if !self.limits.contains_group(pin.group) {
                warn!(name = %pin.name, group = pin.group, "Pin to missing group ignored; name placed freely");
                continue;
            }
            let idx = pin.group - 1;
            if self.room(idx) == 0 {
                warn!(name = %pin.name, group = pin.group, "Pin to full group ignored; name placed freely");
                continue;
            }
            if !self.take(&pin.name) {
                warn!(name = %pin.name, "Pinned name not available in roster");
                continue;
            }
            self.groups[idx].push(pin.name.clone());
        }
    }

    fn place_clusters<S: Shuffler>(&mut self, clusters: &[FixedCluster], shuffler: &mut S) {
        let mut order: Vec<usize> = (0..clusters.len()).collect();
        shuffler.shuffle(&mut order);

        let mut unclaimed: Vec<usize> = (0..self.limits.num_groups).collect();
        shuffler.shuffle(&mut unclaimed);

        for cluster_idx in order {
            let cluster = &clusters[cluster_idx];
            if cluster.is_empty() {
                continue;
            }

            let mut members: Vec<String> = cluster
                .members
                .iter()
                .filter(|name| self.take(name))
                .cloned()
                .collect();
            if members.is_empty() {
                continue;
            }

            let target = match unclaimed.pop() {
                Some(idx) => idx,
                None => self.group_for(members.len()),
            };

            let fit = self.room(target).min(members.len());
            let overflow = members.split_off(fit);
            if !overflow.is_empty() {
                warn!(
                    group = target + 1,
                    overflow = overflow.len(),
                    "Cluster larger than group capacity; excess members placed freely"
                );
            }

            self.groups[target].extend(members);
            self.spilled.extend(overflow);
        }
    }

    /// Least-filled group that holds `size` more members, else the least-filled group.
    fn group_for(&self, size: usize) -> usize {
        self.groups
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.room(*idx) >= size)
            .min_by_key(|(idx, members)| (members.len(), *idx))
            .map(|(idx, _)| idx)
            .unwrap_or_else(|| self.least_filled())
    }

    /// Group with the fewest members; lowest index wins ties.
    fn least_filled(&self) -> usize {
        self.groups
            .iter()
            .enumerate()
            .min_by_key(|(idx, members)| (members.len(), *idx))
            .map(|(idx, _)| idx)
            .unwrap_or(0)
    }

    /// Roster entries not placed by pins or clusters (roster order), then spilled cluster members
    fn free_names(&mut self, roster: &Roster) -> Vec<String> {
        let mut free: Vec<String> = roster
            .names()
            .iter()
            .filter(|name| self.take(name))
            .cloned()
            .collect();
        free.append(&mut self.spilled);
        free
    }

    fn fill(&mut self, free: Vec<String>, targets: &[usize]) {
        let mut free = free.into_iter();

        for (idx, &target) in targets.iter().enumerate() {
            while self.groups[idx].len() < target {
                match free.next() {
                    Some(name) => self.groups[idx].push(name),
                    None => return,
                }
            }
        }

        match self.limits.max_per_group {
            Some(cap) => {
                for idx in 0..self.groups.len() {
                    while self.groups[idx].len() < cap {
                        match free.next() {
                            Some(name) => self.groups[idx].push(name),
                            None => return,
                        }
                    }
                }
            }
            None => {
                // Uncapped runs place everyone.
                for name in free.by_ref() {
                    let idx = self.least_filled();
                    self.groups[idx].push(name);
                }
            }
        }

        self.unassigned.extend(free);
    }

    fn finish<S: Shuffler>(mut self, shuffler: &mut S) -> PartitionResult {
        for members in &mut self.groups {
            shuffler.shuffle(members);
        }

        let groups = self
            .groups
            .into_iter()
            .enumerate()
            .map(|(idx, members)| {
                let mut group = Group::new(idx + 1);
                group.members = members;
                group
            })
            .collect();

        PartitionResult::new(groups, self.unassigned)
    }
}

pub(super) fn run<S: Shuffler>(
    roster: &Roster,
    resolved: &ResolvedConstraints,
    limits: GroupLimits,
    shuffler: &mut S,
) -> PartitionResult {
    let mut fill = Fill::new(roster, limits);

    fill.place_pins(&resolved.pins);
    fill.place_clusters(&resolved.clusters, shuffler);

    let mut free = fill.free_names(roster);
    shuffler.shuffle(&mut free);

    let targets = limits.target_sizes(roster.len());
    fill.fill(free, &targets);

    let result = fill.finish(shuffler);

    if result.capacity_exceeded {
        warn!(
            unassigned = result.unassigned.len(),
            capacity = ?limits.total_capacity(),
            "Roster exceeds group capacity"
        );
    }
    debug!(
        total = roster.len(),
        groups = limits.num_groups,
        placed = result.placed_count(),
        unassigned = result.unassigned.len(),
        "Partition complete"
    );

    result
}

/// Check the result against the roster and the cap.
///
/// Groups plus `unassigned` must equal the roster as a multiset, and no
/// group may exceed `max_per_group`.
pub(super) fn verify_coverage(
    roster: &Roster,
    result: &PartitionResult,
    limits: GroupLimits,
) -> AssignmentResult<()> {
    let mut expected: Vec<&str> = roster.names().iter().map(String::as_str).collect();
    let mut actual: Vec<&str> = result
        .groups
        .iter()
        .flat_map(|g| g.members.iter())
        .chain(result.unassigned.iter())
        .map(String::as_str)
        .collect();

    expected.sort_unstable();
    actual.sort_unstable();

    if expected != actual {
        return Err(AssignmentError::AssignmentFailed(format!(
            "result holds {} names for a roster of {}",
            actual.len(),
            expected.len()
        )));
    }

    if let Some(cap) = limits.max_per_group {
        if let Some(group) = result.groups.iter().find(|g| g.len() > cap) {
            return Err(AssignmentError::AssignmentFailed(format!(
                "group {} holds {} members, cap is {}",
                group.index,
                group.len(),
                cap
            )));
        }
    }

    Ok(())
}
