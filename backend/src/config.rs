//! Run configuration
//!
//! Fixed assignments are loaded once by the presentation shell from its
//! configuration store and passed in explicitly. Nothing in this crate reads
//! ambient or global state.
//!
//! # Accepted shapes
//!
//! Tagged (preferred):
//!
//! ```json
//! {"kind": "clusters", "value": [["Ana", "Budi"], ["Citra"]]}
//! {"kind": "pins", "value": [["Ana", 1], ["Budi", 2]]}
//! {"kind": "none"}
//! ```
//!
//! Bare literals, as older deployments stored them:
//!
//! ```json
//! [["Ana", "Budi"], ["Citra"]]
//! [["Ana", 1], ["Budi", 2]]
//! ```

use crate::error::{AssignmentError, AssignmentResult};
use crate::models::policy::SizingPolicy;
use serde::{Deserialize, Serialize};

/// Fixed-assignment input for one run
///
/// Clusters and pins are mutually exclusive per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FixedAssignments {
    #[default]
    None,

    /// Each inner list must end up in a single group
    Clusters(Vec<Vec<String>>),

    /// `(name, 1-based group index)`; the index stays signed so bad values
    /// are reported as out-of-range conflicts rather than parse failures
    Pins(Vec<(String, i64)>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAssignments {
    Tagged(FixedAssignments),
    BareClusters(Vec<Vec<String>>),
    BarePins(Vec<(String, i64)>),
}

impl From<StoredAssignments> for FixedAssignments {
    fn from(stored: StoredAssignments) -> Self {
        match stored {
            StoredAssignments::Tagged(fixed) => fixed,
            StoredAssignments::BareClusters(clusters) => FixedAssignments::Clusters(clusters),
            StoredAssignments::BarePins(pins) => FixedAssignments::Pins(pins),
        }
    }
}

impl FixedAssignments {
    /// Parse stored fixed assignments
    ///
    /// # Errors
    ///
    /// `MalformedConstraints` when the text is not one of the accepted
    /// shapes. This is a deployment mistake and must not be swallowed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use group_assigner_core_rs::FixedAssignments;
    ///
    /// let fixed = FixedAssignments::from_json(r#"[["Ana", "Budi"]]"#).unwrap();
    /// assert_eq!(fixed, FixedAssignments::Clusters(vec![vec!["Ana".into(), "Budi".into()]]));
    ///
    /// assert!(FixedAssignments::from_json(r#"{"kind": "pins", "value": "Ana"}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> AssignmentResult<Self> {
        let stored: StoredAssignments = serde_json::from_str(json)?;
        Ok(stored.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FixedAssignments::None => true,
            FixedAssignments::Clusters(clusters) => clusters.is_empty(),
            FixedAssignments::Pins(pins) => pins.is_empty(),
        }
    }
}

/// Everything an assignment run needs besides the roster
///
/// # Example
///
/// ```rust
/// use group_assigner_core_rs::{AssignmentConfig, SizingPolicy};
///
/// let config = AssignmentConfig::from_json(r#"{
///     "sizing": {"mode": "exact_group_count", "groups": 2},
///     "fixed": {"kind": "pins", "value": [["Ana", 1]]},
///     "seed": 42
/// }"#).unwrap();
/// assert_eq!(config.sizing, SizingPolicy::ExactGroupCount { groups: 2 });
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentConfig {
    pub sizing: SizingPolicy,

    #[serde(default)]
    pub fixed: FixedAssignments,

    /// Seed for a reproducible run; `None` reseeds from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AssignmentConfig {
    pub fn new(sizing: SizingPolicy) -> Self {
        Self {
            sizing,
            fixed: FixedAssignments::None,
            seed: None,
        }
    }

    pub fn with_fixed(mut self, fixed: FixedAssignments) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse and validate a run configuration
    ///
    /// Malformed or non-positive sizing parameters are reported as
    /// `InvalidConfig`/`InvalidSizing`; a malformed `fixed` block as
    /// `MalformedConstraints`.
    pub fn from_json(json: &str) -> AssignmentResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| AssignmentError::InvalidConfig(format!("Failed to parse JSON: {}", e)))?;

        let sizing_value = value
            .get("sizing")
            .cloned()
            .ok_or_else(|| AssignmentError::InvalidConfig("Missing required field 'sizing'".to_string()))?;
        let sizing: SizingPolicy = serde_json::from_value(sizing_value)
            .map_err(|e| AssignmentError::InvalidConfig(format!("Invalid sizing: {}", e)))?;
        sizing.validate()?;

        let fixed = match value.get("fixed") {
            Some(fixed) if !fixed.is_null() => {
                let stored: StoredAssignments = serde_json::from_value(fixed.clone())?;
                stored.into()
            }
            _ => FixedAssignments::None,
        };

        let seed = match value.get("seed") {
            Some(seed) if !seed.is_null() => Some(seed.as_u64().ok_or_else(|| {
                AssignmentError::InvalidConfig(format!("seed must be a non-negative integer, got {}", seed))
            })?),
            _ => None,
        };

        Ok(Self { sizing, fixed, seed })
    }
}
