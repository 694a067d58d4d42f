//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust results/errors and Python objects.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::error::AssignmentError;
use crate::models::ConstraintConflict;
use crate::partition::AssignmentOutcome;
use crate::resolver::ResolvedConstraints;

/// Map a core error to a Python exception
///
/// Configuration problems raise `ValueError` so the shell can show a clear
/// message and stop; internal faults raise `RuntimeError`.
pub fn assignment_error_to_py(err: AssignmentError) -> PyErr {
    if err.is_configuration_error() {
        PyErr::new::<PyValueError, _>(err.to_string())
    } else {
        PyErr::new::<PyRuntimeError, _>(err.to_string())
    }
}

fn conflicts_to_py<'py>(
    py: Python<'py>,
    conflicts: &[ConstraintConflict],
) -> PyResult<Bound<'py, PyList>> {
    let messages: Vec<String> = conflicts.iter().map(ToString::to_string).collect();
    PyList::new(py, messages)
}

/// Convert an assignment outcome to a Python dict
///
/// Keys:
/// - `groups`: list of member lists, group 1 first
/// - `unassigned`: names that did not fit
/// - `capacity_exceeded`: bool warning flag
/// - `conflicts`: human-readable descriptions of dropped fixed assignments
pub fn outcome_to_py(py: Python<'_>, outcome: &AssignmentOutcome) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("groups", outcome.result.member_lists())?;
    dict.set_item("unassigned", outcome.result.unassigned.clone())?;
    dict.set_item("capacity_exceeded", outcome.result.capacity_exceeded)?;
    dict.set_item("conflicts", conflicts_to_py(py, &outcome.conflicts)?)?;
    Ok(dict.unbind())
}

/// Convert resolved constraints to a Python dict
///
/// Keys: `pins` (list of `(name, group)`), `clusters` (list of member lists),
/// `conflicts` (list of strings)
pub fn resolved_to_py(py: Python<'_>, resolved: &ResolvedConstraints) -> PyResult<Py<PyDict>> {
    let pins: Vec<(String, usize)> = resolved
        .pins
        .iter()
        .map(|p| (p.name.clone(), p.group))
        .collect();
    let clusters: Vec<Vec<String>> = resolved.clusters.iter().map(|c| c.members.clone()).collect();

    let dict = PyDict::new(py);
    dict.set_item("pins", pins)?;
    dict.set_item("clusters", clusters)?;
    dict.set_item("conflicts", conflicts_to_py(py, &resolved.conflicts)?)?;
    Ok(dict.unbind())
}
