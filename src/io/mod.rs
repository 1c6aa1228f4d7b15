//! Input helpers.
//!
//! - run-configuration TOML (`config`)

pub mod config;

pub use config::*;
