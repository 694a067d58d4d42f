//! PyO3 entry points
//!
//! # Example (from Python)
//!
//! ```python
//! from group_assigner_core_rs import assign
//!
//! fixed = st.secrets["ASSIGNMENT"]          # '[["Ana", "Budi"]]'
//! result = assign(names, "exact_group_count", 3, fixed_json=fixed)
//! for idx, members in enumerate(result["groups"], start=1):
//!     print(f"Group {idx}: {members}")
//! if result["capacity_exceeded"]:
//!     print("Not placed:", result["unassigned"])
//! ```

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{assignment_error_to_py, outcome_to_py, resolved_to_py};
use crate::config::FixedAssignments;
use crate::models::{Roster, SizingPolicy};
use crate::partition::assign;
use crate::resolver::resolve;
use crate::rng::{EntropyShuffler, RngManager};

fn parse_fixed(fixed_json: Option<&str>) -> PyResult<FixedAssignments> {
    match fixed_json {
        Some(json) if !json.trim().is_empty() => {
            FixedAssignments::from_json(json).map_err(assignment_error_to_py)
        }
        _ => Ok(FixedAssignments::None),
    }
}

/// Split a roster into groups
///
/// # Arguments
///
/// * `roster` - Names as entered; entries are trimmed and blanks dropped
/// * `mode` - `exact_group_count`, `exact_group_size` or `bounded_capacity`
/// * `first` - Group count, group size, or max groups
/// * `second` - Max per group (`bounded_capacity` only)
/// * `fixed_json` - Stored fixed assignments (clusters or pins)
/// * `seed` - Seed for a reproducible run; omitted means a fresh random run
///
/// # Errors
///
/// Raises ValueError for configuration problems (empty roster, non-positive
/// parameters, malformed fixed assignments) and RuntimeError if the
/// assignment itself failed.
#[pyfunction]
#[pyo3(name = "assign", signature = (roster, mode, first, second=None, fixed_json=None, seed=None))]
pub fn py_assign(
    py: Python<'_>,
    roster: Vec<String>,
    mode: &str,
    first: i64,
    second: Option<i64>,
    fixed_json: Option<&str>,
    seed: Option<u64>,
) -> PyResult<Py<PyDict>> {
    let roster = Roster::from_entries(roster);
    let policy = SizingPolicy::from_mode(mode, first, second).map_err(assignment_error_to_py)?;
    let fixed = parse_fixed(fixed_json)?;

    let outcome = match seed {
        Some(seed) => assign(&roster, &fixed, policy, &mut RngManager::new(seed)),
        None => assign(&roster, &fixed, policy, &mut EntropyShuffler::new()),
    }
    .map_err(assignment_error_to_py)?;

    outcome_to_py(py, &outcome)
}

/// Normalize stored fixed assignments against a roster without partitioning
///
/// Useful for showing the operator which fixed assignments will be dropped.
#[pyfunction]
#[pyo3(name = "resolve", signature = (roster, fixed_json))]
pub fn py_resolve(py: Python<'_>, roster: Vec<String>, fixed_json: &str) -> PyResult<Py<PyDict>> {
    let roster = Roster::from_entries(roster);
    let fixed = parse_fixed(Some(fixed_json))?;
    let resolved = resolve(&roster, &fixed, None);
    resolved_to_py(py, &resolved)
}
