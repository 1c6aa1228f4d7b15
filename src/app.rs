//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - resolves the run config
//! - runs comparisons / searches
//! - prints reports

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, CompareArgs, OptimizeArgs, SearchArgs};
use crate::error::AppError;
use crate::report::{format_best, format_evaluations, format_new_best, format_race_header, format_top};
use crate::search::{
    Candidate, CompoundPair, NoopObserver, PitWindow, Scoring, TOP_K, find_best_one_stop,
    sweep_risk_lambdas,
};

pub mod pipeline;

/// Entry point for the `pitsim` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may carry RUST_LOG; a missing file is fine.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Compare(args) => handle_compare(args),
        Command::Optimize(args) => handle_optimize(args),
        Command::Search(args) => handle_search(args),
    }
}

fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn handle_compare(args: CompareArgs) -> Result<(), AppError> {
    let config = pipeline::resolve_run_config(&args.race)?;
    let strategies = pipeline::reference_strategies(&config.race)?;
    let evaluations =
        pipeline::compare_strategies(&config.race, &config.tires, &strategies, args.trials, args.seed)?;

    println!("{}", format_race_header(&config.race));
    print!("{}", format_evaluations(&evaluations));
    Ok(())
}

fn handle_optimize(args: OptimizeArgs) -> Result<(), AppError> {
    let config = pipeline::resolve_run_config(&args.race)?;
    let window = PitWindow::new(args.lap_min, args.lap_max)?;

    println!("{}", format_race_header(&config.race));
    println!("Searching best 1-stop {}->{} ...", args.first, args.second);

    let mut print_new_best = |c: &Candidate| println!("{}", format_new_best(c));
    let best = find_best_one_stop(
        &config.race,
        &config.tires,
        args.first,
        args.second,
        window,
        args.trials,
        &mut print_new_best,
    )?;

    println!("{}", format_best(&Scoring::Mean.to_string(), &best));
    Ok(())
}

fn handle_search(args: SearchArgs) -> Result<(), AppError> {
    let config = pipeline::resolve_run_config(&args.race)?;
    let window = PitWindow::new(args.lap_min, args.lap_max)?;
    let pairs: &[CompoundPair] = if args.include_same_compound {
        &CompoundPair::WITH_SAME_COMPOUND
    } else {
        &CompoundPair::STANDARD
    };

    println!("{}", format_race_header(&config.race));
    println!(
        "Optimizing 1-stop (compound order + pit lap), laps {}..={}, n={} sims/candidate",
        window.min, window.max, args.trials
    );

    let outcomes = sweep_risk_lambdas(
        &config.race,
        &config.tires,
        pairs,
        window,
        args.trials,
        &args.lambdas,
        &mut NoopObserver,
    )?;

    for outcome in &outcomes {
        println!("\n=== Risk-adjusted optimization (score = {}) ===", outcome.scoring);
        for c in &outcome.improvements {
            println!("{}", format_new_best(c));
        }
        println!();
        print!("{}", format_top(outcome, TOP_K));
        println!("{}", format_best(&outcome.scoring.to_string(), &outcome.best));
    }
    Ok(())
}
