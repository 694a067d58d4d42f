//! Domain models for group assignment

pub mod constraint;
pub mod group;
pub mod policy;
pub mod roster;

// Re-exports
pub use constraint::{ConstraintConflict, FixedCluster, FixedPin};
pub use group::{Group, PartitionResult};
pub use policy::{GroupLimits, SizingPolicy};
pub use roster::Roster;
