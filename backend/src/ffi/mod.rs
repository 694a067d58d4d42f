//! Python bindings for the presentation shell
//!
//! The shell collects the roster, the sizing mode and the stored fixed
//! assignments, calls in here with plain data and renders what comes back.

pub mod assign;
pub mod types;
