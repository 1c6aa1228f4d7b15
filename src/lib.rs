//! `pit-strategy` library crate.
//!
//! Monte Carlo estimation and grid search of motorsport pit-stop strategies.
//! The binary (`pitsim`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the simulation/search API is reusable by other drivers

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod search;
pub mod sim;
pub mod strategy;
