//! Fixed placements and the conflicts found while resolving them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mandatory placement of one name into a group (1-based index)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedPin {
    pub name: String,
    pub group: usize,
}

impl FixedPin {
    pub fn new(name: impl Into<String>, group: usize) -> Self {
        Self {
            name: name.into(),
            group,
        }
    }
}

/// Names that must share a group; which group is left to the partitioner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedCluster {
    pub members: Vec<String>,
}

impl FixedCluster {
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A fixed placement that was dropped during resolution
///
/// Conflicts are non-fatal. Precedence is first-seen-wins; everything
/// discarded is listed here so the operator can see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConstraintConflict {
    /// Name does not appear in the roster
    UnknownName { name: String },

    /// Name already pinned (or pinned more often than it occurs in the roster)
    DuplicatePin {
        name: String,
        kept_group: usize,
        dropped_group: i64,
    },

    /// Pin targets a group that does not exist
    GroupOutOfRange { name: String, group: i64 },

    /// Pin targets a group whose pin count already reached the per-group cap
    GroupFull { name: String, group: usize },

    /// Name already belongs to an earlier cluster (0-based cluster position)
    OverlappingCluster {
        name: String,
        kept_cluster: usize,
        dropped_cluster: usize,
    },
}

impl fmt::Display for ConstraintConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintConflict::UnknownName { name } => {
                write!(f, "'{}' is not in the roster", name)
            }
            ConstraintConflict::DuplicatePin {
                name,
                kept_group,
                dropped_group,
            } => write!(
                f,
                "'{}' already pinned to group {}; pin to group {} dropped",
                name, kept_group, dropped_group
            ),
            ConstraintConflict::GroupOutOfRange { name, group } => {
                write!(f, "pin of '{}' to group {} is out of range", name, group)
            }
            ConstraintConflict::GroupFull { name, group } => {
                write!(f, "group {} is full; pin of '{}' dropped", group, name)
            }
            ConstraintConflict::OverlappingCluster {
                name,
                kept_cluster,
                dropped_cluster,
            } => write!(
                f,
                "'{}' already in cluster {}; removed from cluster {}",
                name, kept_cluster, dropped_cluster
            ),
        }
    }
}
