//! Reporting utilities: strategy evaluations and formatted terminal output.
//!
//! Formatting lives here so the simulation and search code stays free of
//! presentation concerns.

pub mod format;

pub use format::*;
