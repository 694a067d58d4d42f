//! Group Assigner Core - Rust Engine
//!
//! Splits a roster of names into groups under a sizing policy while honoring
//! fixed placements (name→group pins, or clusters that must share a group).
//!
//! # Architecture
//!
//! - **models**: Domain types (Roster, SizingPolicy, Group, PartitionResult)
//! - **config**: Fixed-assignment and run configuration parsing
//! - **resolver**: Normalizes fixed assignments against the roster
//! - **partition**: Group Partitioner (seeding, target sizes, randomized fill)
//! - **rng**: Injectable random sources (seeded and entropy-seeded)
//!
//! # Critical Invariants
//!
//! 1. Every roster entry lands in exactly one group or in `unassigned`
//! 2. All randomness goes through a caller-supplied `Shuffler`
//! 3. No global state: configuration is always passed in explicitly
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod config;
pub mod error;
pub mod models;
pub mod partition;
pub mod resolver;
pub mod rng;

// Re-exports for convenience
pub use config::{AssignmentConfig, FixedAssignments};
pub use error::{AssignmentError, AssignmentResult};
pub use models::{
    ConstraintConflict, FixedCluster, FixedPin, Group, GroupLimits, PartitionResult, Roster,
    SizingPolicy,
};
pub use partition::{
    assign, assign_with_config, partition, partition_with_limits, AssignmentOutcome,
};
pub use resolver::{resolve, ResolvedConstraints};
pub use rng::{EntropyShuffler, RngManager, Shuffler};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn group_assigner_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::assign::py_assign, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::assign::py_resolve, m)?)?;
    Ok(())
}
