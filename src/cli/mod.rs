//! Command-line parsing for the pit-stop strategy simulator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! simulation/search code. Every race flag is optional so that values can come
//! from `--config` or the built-in defaults instead.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::Compound;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pitsim", version, about = "Monte Carlo pit-stop strategy simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare the reference one-stop and two-stop strategies.
    Compare(CompareArgs),
    /// Find the best pit lap for a fixed compound pair (scored by mean time).
    Optimize(OptimizeArgs),
    /// Search compound pairs and pit laps under a risk-adjusted score.
    Search(SearchArgs),
}

/// Race configuration shared by every subcommand.
///
/// Precedence: flag > `--config` file > built-in default.
#[derive(Debug, Args, Clone, Default)]
pub struct RaceArgs {
    /// TOML run config (`[race]` and `[tires.*]` sections).
    #[arg(long, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Track name.
    #[arg(long)]
    pub track: Option<String>,

    /// Race length in laps.
    #[arg(long)]
    pub laps: Option<u32>,

    /// Base lap time (seconds).
    #[arg(long)]
    pub base_lap_time: Option<f64>,

    /// Mean time lost per pit stop (seconds).
    #[arg(long)]
    pub pit_loss: Option<f64>,

    /// Pit-stop loss standard deviation (seconds).
    #[arg(long)]
    pub pit_sigma: Option<f64>,

    /// Lap-time gain per lap from fuel burn-off (seconds).
    #[arg(long)]
    pub fuel_effect: Option<f64>,

    /// Lap-to-lap noise standard deviation (seconds).
    #[arg(long)]
    pub noise_sigma: Option<f64>,
}

#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub race: RaceArgs,

    /// Simulated races per strategy.
    #[arg(short = 'n', long, default_value_t = 3000)]
    pub trials: usize,

    /// Monte Carlo seed.
    #[arg(long, default_value_t = 7)]
    pub seed: u64,
}

#[derive(Debug, Args, Clone)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub race: RaceArgs,

    /// Compound for the first stint.
    #[arg(long, value_enum, default_value_t = Compound::Soft)]
    pub first: Compound,

    /// Compound for the second stint.
    #[arg(long, value_enum, default_value_t = Compound::Medium)]
    pub second: Compound,

    /// Earliest pit lap to try.
    #[arg(long, default_value_t = 10)]
    pub lap_min: u32,

    /// Latest pit lap to try (inclusive).
    #[arg(long, default_value_t = 35)]
    pub lap_max: u32,

    /// Simulated races per candidate.
    #[arg(short = 'n', long, default_value_t = 1500)]
    pub trials: usize,
}

#[derive(Debug, Args, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub race: RaceArgs,

    /// Earliest pit lap to try.
    #[arg(long, default_value_t = 10)]
    pub lap_min: u32,

    /// Latest pit lap to try (inclusive).
    #[arg(long, default_value_t = 40)]
    pub lap_max: u32,

    /// Simulated races per candidate.
    #[arg(short = 'n', long, default_value_t = 1500)]
    pub trials: usize,

    /// Risk aversion λ in `score = mean + λ·std` (repeat to sweep).
    #[arg(long = "lambda", default_values_t = [0.0, 0.5, 1.0, 2.0])]
    pub lambdas: Vec<f64>,

    /// Also consider medium -> medium.
    #[arg(long)]
    pub include_same_compound: bool,
}
