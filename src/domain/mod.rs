//! Domain types used throughout the simulator.
//!
//! This module defines:
//!
//! - tire compounds and their degradation models (`Compound`, `TireModel`, `TireModels`)
//! - race configuration (`RaceParams`)
//! - strategies (`Stint`, `Strategy`) and Monte Carlo summaries (`McResult`)

pub mod types;

pub use types::*;
