//! Partition output
//!
//! # Critical Invariants
//!
//! 1. **Coverage**: every roster entry appears exactly once across all groups
//!    plus `unassigned`
//! 2. **Immutability**: results are built once by the partitioner and only read afterwards

use serde::{Deserialize, Serialize};

/// One group and its members in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// 1-based group index
    pub index: usize,
    pub members: Vec<String>,
}

impl Group {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }
}

/// Groups plus everyone who did not fit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionResult {
    pub groups: Vec<Group>,

    /// Participants left over once every group reached its capacity
    pub unassigned: Vec<String>,

    /// True when `unassigned` is non-empty (UI warning flag)
    pub capacity_exceeded: bool,
}

impl PartitionResult {
    pub fn new(groups: Vec<Group>, unassigned: Vec<String>) -> Self {
        let capacity_exceeded = !unassigned.is_empty();
        Self {
            groups,
            unassigned,
            capacity_exceeded,
        }
    }

    /// Look up a group by its 1-based index
    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.iter().find(|g| g.index == index)
    }

    /// 1-based index of the first group holding `name`
    pub fn group_of(&self, name: &str) -> Option<usize> {
        self.groups
            .iter()
            .find(|g| g.contains(name))
            .map(|g| g.index)
    }

    /// Number of participants placed in some group
    pub fn placed_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Member lists only, in group order
    pub fn member_lists(&self) -> Vec<Vec<String>> {
        self.groups.iter().map(|g| g.members.clone()).collect()
    }
}
