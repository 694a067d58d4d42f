//! Group Partitioner
//!
//! Turns a roster, its resolved fixed assignments and a sizing policy into
//! groups plus an overflow list.
//!
//! # Algorithm
//!
//! 1. Seed groups with pinned names, then place clusters (each cluster claims
//!    a random unclaimed group; once every group is claimed, the least-filled one)
//! 2. Compute target sizes: `total / n`, first `total % n` groups get one more,
//!    clamped to the per-group cap
//! 3. Shuffle the remaining free names
//! 4. Fill groups in index order up to their target, then up to the cap
//! 5. Whatever is left becomes `unassigned`
//! 6. Shuffle each group's member order for display
//!
//! # Critical Invariants
//!
//! 1. **Coverage**: every roster entry lands in exactly one group or in `unassigned`
//! 2. **Capacity**: no group exceeds `max_per_group` when a cap is in effect
//! 3. **Balance**: without fixed assignments or a cap, group sizes differ by at most one
//!
//! # Example
//!
//! ```rust
//! use group_assigner_core_rs::{assign, FixedAssignments, Roster, RngManager, SizingPolicy};
//!
//! let roster = Roster::from_entries(["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
//! let policy = SizingPolicy::BoundedCapacity { max_groups: 2, max_per_group: 3 };
//! let mut rng = RngManager::new(12345);
//!
//! let outcome = assign(&roster, &FixedAssignments::None, policy, &mut rng).unwrap();
//! assert_eq!(outcome.result.placed_count(), 6);
//! assert_eq!(outcome.result.unassigned.len(), 4);
//! assert!(outcome.result.capacity_exceeded);
//! ```

mod engine;


use crate::config::{AssignmentConfig, FixedAssignments};
use crate::error::{AssignmentError, AssignmentResult};
use crate::models::{ConstraintConflict, GroupLimits, PartitionResult, Roster, SizingPolicy};
use crate::resolver::{resolve, ResolvedConstraints};
use crate::rng::{EntropyShuffler, RngManager, Shuffler};
use serde::{Deserialize, Serialize};

/// Partition a roster under a sizing policy
///
/// # Errors
///
/// - `EmptyRoster` if the roster has no entries
/// - `InvalidSizing` for zero group count or zero capacity
/// - `AssignmentFailed` if the result breaks the coverage invariant
///
/// Running out of capacity is not an error; see `PartitionResult::unassigned`.
pub fn partition<S: Shuffler>(
    roster: &Roster,
    resolved: &ResolvedConstraints,
    policy: SizingPolicy,
    shuffler: &mut S,
) -> AssignmentResult<PartitionResult> {
    let limits = policy.limits(roster.len())?;
    partition_with_limits(roster, resolved, limits, shuffler)
}

/// Partition with explicit group count and cap
pub fn partition_with_limits<S: Shuffler>(
    roster: &Roster,
    resolved: &ResolvedConstraints,
    limits: GroupLimits,
    shuffler: &mut S,
) -> AssignmentResult<PartitionResult> {
    if roster.is_empty() {
        return Err(AssignmentError::EmptyRoster);
    }
    limits.validate()?;

    let result = engine::run(roster, resolved, limits, shuffler);
    engine::verify_coverage(roster, &result, limits)?;
    Ok(result)
}

/// Result of a full resolve + partition run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentOutcome {
    pub result: PartitionResult,

    /// Fixed assignments dropped during resolution
    pub conflicts: Vec<ConstraintConflict>,
}

/// Resolve fixed assignments with the policy's limits, then partition
pub fn assign<S: Shuffler>(
    roster: &Roster,
    fixed: &FixedAssignments,
    policy: SizingPolicy,
    shuffler: &mut S,
) -> AssignmentResult<AssignmentOutcome> {
    if roster.is_empty() {
        return Err(AssignmentError::EmptyRoster);
    }
    let limits = policy.limits(roster.len())?;

    let resolved = resolve(roster, fixed, Some(limits));
    let result = partition_with_limits(roster, &resolved, limits, shuffler)?;

    Ok(AssignmentOutcome {
        result,
        conflicts: resolved.conflicts,
    })
}

/// Run `assign` with the shuffler the configuration asks for
///
/// A configured seed gives a reproducible `RngManager`; otherwise the run is
/// reseeded from OS entropy.
pub fn assign_with_config(
    roster: &Roster,
    config: &AssignmentConfig,
) -> AssignmentResult<AssignmentOutcome> {
    match config.seed {
        Some(seed) => assign(roster, &config.fixed, config.sizing, &mut RngManager::new(seed)),
        None => assign(roster, &config.fixed, config.sizing, &mut EntropyShuffler::new()),
    }
}
