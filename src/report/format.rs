//! Terminal formatting for comparisons and searches.

use crate::domain::{McResult, RaceParams};
use crate::search::{Candidate, SearchOutcome};

/// Monte Carlo estimate for one named strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub name: String,
    pub result: McResult,
}

/// Race header line shared by every command.
pub fn format_race_header(params: &RaceParams) -> String {
    format!(
        "Track: {} | Laps: {} | base={:.2}s pit={:.2}s±{:.2} fuel={:.3}s/lap noise={:.2}s",
        params.track,
        params.laps,
        params.base_lap_time,
        params.pit_loss,
        params.pit_sigma,
        params.fuel_effect,
        params.noise_sigma,
    )
}

/// Side-by-side (mean, std) table for a strategy comparison.
pub fn format_evaluations(evaluations: &[Evaluation]) -> String {
    let mut out = String::new();
    for e in evaluations {
        out.push_str(&format!(
            "{:<35} mean={:>9.2}s  std={:>5.2}s\n",
            e.name, e.result.mean, e.result.std
        ));
    }
    out
}

/// One "new best" progress line.
pub fn format_new_best(candidate: &Candidate) -> String {
    format!(
        "NEW BEST: {:<30} score={:.2} mean={:.2}s std={:.2}s",
        candidate.name, candidate.score, candidate.mean, candidate.std
    )
}

/// Summary line for a search winner.
pub fn format_best(label: &str, best: &Candidate) -> String {
    format!(
        "BEST ({label}): {} | score={:.2} mean={:.2} std={:.2}",
        best.name, best.score, best.mean, best.std
    )
}

/// Top-k table of a cross-compound search.
pub fn format_top(outcome: &SearchOutcome, k: usize) -> String {
    let mut out = format!("Top {k} strategies by risk-adjusted score ({}):\n", outcome.scoring);
    for c in outcome.top(k) {
        out.push_str(&format!(
            "{} @L{} | score={:.2} mean={:.2} std={:.2}\n",
            c.pair, c.pit_lap, c.score, c.mean, c.std
        ));
    }
    out
}
