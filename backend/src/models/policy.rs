//! Sizing policies
//!
//! A sizing policy decides how many groups a run produces and whether groups
//! have a hard per-group capacity.
//!
//! Available policies:
//! 1. **ExactGroupCount**: exactly `groups` groups, no cap, everyone placed
//! 2. **ExactGroupSize**: `ceil(total / per_group)` groups, each capped at `per_group`
//! 3. **BoundedCapacity**: `max_groups` groups capped at `max_per_group`; excess is unassigned

use crate::error::{AssignmentError, AssignmentResult};
use serde::{Deserialize, Serialize};

/// Operator-chosen sizing rule
///
/// # Example
///
/// ```rust
/// use group_assigner_core_rs::SizingPolicy;
///
/// let policy = SizingPolicy::ExactGroupSize { per_group: 3 };
/// let limits = policy.limits(10).unwrap();
/// assert_eq!(limits.num_groups, 4); // ceil(10 / 3)
/// assert_eq!(limits.max_per_group, Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SizingPolicy {
    ExactGroupCount { groups: usize },
    ExactGroupSize { per_group: usize },
    BoundedCapacity {
        max_groups: usize,
        max_per_group: usize,
    },
}

impl SizingPolicy {
    /// Build a policy from a mode name and signed parameters
    ///
    /// Parameters arrive signed from the presentation shell so that zero and
    /// negative inputs can be rejected with a configuration error instead of
    /// wrapping.
    ///
    /// Recognized modes: `exact_group_count`, `exact_group_size`,
    /// `bounded_capacity` (the latter needs `second`).
    pub fn from_mode(mode: &str, first: i64, second: Option<i64>) -> AssignmentResult<Self> {
        let positive = |label: &str, value: i64| -> AssignmentResult<usize> {
            if value <= 0 {
                return Err(AssignmentError::InvalidSizing(format!(
                    "{} must be positive, got {}",
                    label, value
                )));
            }
            usize::try_from(value)
                .map_err(|_| AssignmentError::InvalidSizing(format!("{} too large", label)))
        };

        match mode {
            "exact_group_count" | "groups" => Ok(SizingPolicy::ExactGroupCount {
                groups: positive("group count", first)?,
            }),
            "exact_group_size" | "per_group" => Ok(SizingPolicy::ExactGroupSize {
                per_group: positive("group size", first)?,
            }),
            "bounded_capacity" | "bounded" => {
                let second = second.ok_or_else(|| {
                    AssignmentError::InvalidSizing(
                        "bounded_capacity needs max_groups and max_per_group".to_string(),
                    )
                })?;
                Ok(SizingPolicy::BoundedCapacity {
                    max_groups: positive("max groups", first)?,
                    max_per_group: positive("max per group", second)?,
                })
            }
            other => Err(AssignmentError::InvalidSizing(format!(
                "unknown sizing mode '{}'. Must be 'exact_group_count', 'exact_group_size' or 'bounded_capacity'",
                other
            ))),
        }
    }

    /// Check that every parameter is positive
    pub fn validate(&self) -> AssignmentResult<()> {
        let zero = |label: &str| -> AssignmentResult<()> {
            Err(AssignmentError::InvalidSizing(format!(
                "{} must be positive, got 0",
                label
            )))
        };

        match *self {
            SizingPolicy::ExactGroupCount { groups: 0 } => zero("group count"),
            SizingPolicy::ExactGroupSize { per_group: 0 } => zero("group size"),
            SizingPolicy::BoundedCapacity { max_groups: 0, .. } => zero("max groups"),
            SizingPolicy::BoundedCapacity {
                max_per_group: 0, ..
            } => zero("max per group"),
            _ => Ok(()),
        }
    }

    /// Derive group count and capacity for a roster of `total_people`
    ///
    /// `ExactGroupSize` rounds up so every participant fits.
    pub fn limits(&self, total_people: usize) -> AssignmentResult<GroupLimits> {
        self.validate()?;

        let limits = match *self {
            SizingPolicy::ExactGroupCount { groups } => GroupLimits::new(groups, None),
            SizingPolicy::ExactGroupSize { per_group } => {
                // An empty roster still needs one group to be well-formed.
                let groups = total_people.div_ceil(per_group).max(1);
                GroupLimits::new(groups, Some(per_group))
            }
            SizingPolicy::BoundedCapacity {
                max_groups,
                max_per_group,
            } => GroupLimits::new(max_groups, Some(max_per_group)),
        };
        Ok(limits)
    }
}

/// Resolved group count and optional per-group cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupLimits {
    pub num_groups: usize,
    pub max_per_group: Option<usize>,
}

impl GroupLimits {
    pub fn new(num_groups: usize, max_per_group: Option<usize>) -> Self {
        Self {
            num_groups,
            max_per_group,
        }
    }

    pub fn validate(&self) -> AssignmentResult<()> {
        if self.num_groups == 0 {
            return Err(AssignmentError::InvalidSizing(
                "group count must be positive, got 0".to_string(),
            ));
        }
        if self.max_per_group == Some(0) {
            return Err(AssignmentError::InvalidSizing(
                "max per group must be positive, got 0".to_string(),
            ));
        }
        Ok(())
    }

    /// `num_groups * max_per_group`, or `None` when uncapped
    pub fn total_capacity(&self) -> Option<usize> {
        self.max_per_group
            .map(|cap| cap.saturating_mul(self.num_groups))
    }

    /// Whether a 1-based group index exists under these limits
    pub fn contains_group(&self, group: usize) -> bool {
        (1..=self.num_groups).contains(&group)
    }

    /// Ideal size of each group, clamped to the cap
    ///
    /// `base = total / n`; the first `total % n` groups (by index) get
    /// `base + 1`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use group_assigner_core_rs::GroupLimits;
    ///
    /// assert_eq!(GroupLimits::new(3, None).target_sizes(10), vec![4, 3, 3]);
    /// assert_eq!(GroupLimits::new(2, Some(3)).target_sizes(10), vec![3, 3]);
    /// ```
    pub fn target_sizes(&self, total_people: usize) -> Vec<usize> {
        if self.num_groups == 0 {
            return Vec::new();
        }

        let base = total_people / self.num_groups;
        let extra = total_people % self.num_groups;

        (0..self.num_groups)
            .map(|i| {
                let size = base + usize::from(i < extra);
                match self.max_per_group {
                    Some(cap) => size.min(cap),
                    None => size,
                }
            })
            .collect()
    }
}
