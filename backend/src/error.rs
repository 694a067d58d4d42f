//! Assignment error taxonomy
//!
//! Only fatal conditions live here. Capacity overflow is reported through
//! `PartitionResult::unassigned` and constraint conflicts through
//! `ResolvedConstraints::conflicts`; neither aborts a run.

use thiserror::Error;

/// Errors that stop an assignment run
#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid sizing policy: {0}")]
    InvalidSizing(String),

    #[error("Roster is empty: enter at least one name")]
    EmptyRoster,

    #[error("Malformed fixed assignments: {0}")]
    MalformedConstraints(#[from] serde_json::Error),

    #[error("Assignment failed: {0}")]
    AssignmentFailed(String),
}

impl AssignmentError {
    /// True for deployment/operator mistakes the caller must fix before rerunning.
    ///
    /// `AssignmentFailed` is the only variant that is not a configuration
    /// error; it signals an internal fault.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, AssignmentError::AssignmentFailed(_))
    }
}

pub type AssignmentResult<T> = Result<T, AssignmentError>;
