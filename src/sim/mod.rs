//! Stochastic race simulation.
//!
//! Responsibilities:
//!
//! - per-lap time model (fuel burn-off, tire degradation, noise)
//! - one full race for a strategy from a single seeded random stream
//! - Monte Carlo estimation of (mean, std) race time (parallel trials)

pub mod lap;
pub mod monte_carlo;
pub mod race;

pub use lap::*;
pub use monte_carlo::*;
pub use race::*;
