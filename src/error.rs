//! Error types.
//!
//! - `StrategyError`: a strategy's stints do not cover the race exactly once.
//! - `SimError`: everything the simulation/search core can reject.
//! - `AppError`: what the `pitsim` binary reports (message + process exit code).

use thiserror::Error;

/// A strategy failed coverage validation.
///
/// Every variant names the rule that was broken; all but `Empty` carry the
/// index of the offending stint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("Strategy must have at least one stint.")]
    Empty,

    #[error("Stint 0 starts at lap {actual}, expected 1.")]
    FirstStintStart { actual: u32 },

    #[error("Stint {index} starts at lap {actual}, expected {expected} (gap).")]
    Gap { index: usize, expected: u32, actual: u32 },

    #[error("Stint {index} starts at lap {actual}, expected {expected} (overlap).")]
    Overlap { index: usize, expected: u32, actual: u32 },

    #[error("Stint {index} ends at lap {end_lap} before its start lap {start_lap}.")]
    EndBeforeStart { index: usize, start_lap: u32, end_lap: u32 },

    #[error("Strategy does not cover the full race: stint {index} ends at lap {actual}, expected {expected}.")]
    IncompleteCoverage { index: usize, expected: u32, actual: u32 },
}

impl StrategyError {
    /// Index of the stint that triggered the failure, if any.
    pub fn stint_index(&self) -> Option<usize> {
        match self {
            StrategyError::Empty => None,
            StrategyError::FirstStintStart { .. } => Some(0),
            StrategyError::Gap { index, .. }
            | StrategyError::Overlap { index, .. }
            | StrategyError::EndBeforeStart { index, .. }
            | StrategyError::IncompleteCoverage { index, .. } => Some(*index),
        }
    }
}

/// Errors raised by the simulation and search core.
///
/// All of these are construction-time failures; once inputs are accepted,
/// simulation and estimation cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("Invalid strategy: {0}")]
    Strategy(#[from] StrategyError),

    #[error("Monte Carlo trial count must be > 0.")]
    ZeroTrials,

    #[error("Empty pit window: lap_min={min} > lap_max={max}.")]
    EmptyPitWindow { min: u32, max: u32 },

    #[error("Search space is empty: no compound pairs to evaluate.")]
    EmptySearchSpace,

    #[error("Risk lambda must be finite and >= 0 (got {0}).")]
    InvalidRiskLambda(f64),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<SimError> for AppError {
    fn from(err: SimError) -> Self {
        AppError::new(2, err.to_string())
    }
}

impl From<StrategyError> for AppError {
    fn from(err: StrategyError) -> Self {
        SimError::from(err).into()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
