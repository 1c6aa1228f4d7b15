//! Read run-configuration TOML files.
//!
//! A run config holds the race parameters and the tire table. Every field is
//! optional; missing fields take the built-in defaults:
//!
//! ```toml
//! [race]
//! track = "Monza"
//! laps = 53
//! noise_sigma = 0.35
//!
//! [tires.soft]
//! base = 0.0
//! lin = 0.07
//! quad = 0.0025
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{RaceParams, TireModels};
use crate::error::{AppError, SimError};

/// Race parameters plus the tire table used for every simulation in a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub race: RaceParams,
    pub tires: TireModels,
}

impl RunConfig {
    /// Check the race parameters and every tire coefficient.
    pub fn validate(&self) -> Result<(), SimError> {
        self.race.validate()?;
        self.tires.validate()
    }
}

/// Read and parse a run config file.
pub fn read_run_config(path: &Path) -> Result<RunConfig, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::new(2, format!("Failed to read config '{}': {e}", path.display())))?;
    parse_run_config(&text)
        .map_err(|e| AppError::new(2, format!("Invalid config '{}': {e}", path.display())))
}

/// Parse run config TOML text.
pub fn parse_run_config(text: &str) -> Result<RunConfig, AppError> {
    toml::from_str(text).map_err(|e| AppError::new(2, format!("TOML parse error: {e}")))
}
