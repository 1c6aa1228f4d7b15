//! One-stop strategy optimizer.
//!
//! Two entry points with different scoring:
//! - `find_best_one_stop`: fixed compound pair, score = mean race time
//! - `find_best_one_stop_any_compounds`: catalog of pairs, score = mean + λ·std
//!
//! Every candidate in one search uses the same Monte Carlo trial count and seed
//! (`SEARCH_SEED`), so candidates differ only by strategy. The running best is
//! replaced only on a strictly lower score (ties keep the earliest candidate) and
//! each improvement is reported to a `SearchObserver` in grid order.

use std::time::Instant;

use tracing::{debug, info};

use crate::domain::{Compound, RaceParams, TireModels};
use crate::error::SimError;
use crate::search::grid::{CompoundPair, PitWindow, one_stop_grid};
use crate::sim::monte_carlo;
use crate::strategy::one_stop;

/// Monte Carlo seed shared by every candidate in a search.
pub const SEARCH_SEED: u64 = 999;

/// Size of the reported ranking.
pub const TOP_K: usize = 5;

/// How a candidate's (mean, std) is turned into a score (lower is better).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scoring {
    /// Expected race time only.
    Mean,
    /// `mean + risk_lambda * std`.
    RiskAdjusted { risk_lambda: f64 },
}

impl Scoring {
    pub fn risk_adjusted(risk_lambda: f64) -> Result<Self, SimError> {
        if !(risk_lambda.is_finite() && risk_lambda >= 0.0) {
            return Err(SimError::InvalidRiskLambda(risk_lambda));
        }
        Ok(Scoring::RiskAdjusted { risk_lambda })
    }

    pub fn score(self, mean: f64, std: f64) -> f64 {
        match self {
            Scoring::Mean => mean,
            Scoring::RiskAdjusted { risk_lambda } => mean + risk_lambda * std,
        }
    }
}

impl std::fmt::Display for Scoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scoring::Mean => write!(f, "mean"),
            Scoring::RiskAdjusted { risk_lambda } => write!(f, "mean + {risk_lambda}·std"),
        }
    }
}

/// One evaluated point of the search grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub pair: CompoundPair,
    pub pit_lap: u32,
    pub name: String,
    pub mean: f64,
    pub std: f64,
    pub scoring: Scoring,
    pub score: f64,
}

impl Candidate {
    fn rescored(&self, scoring: Scoring) -> Self {
        Self {
            scoring,
            score: scoring.score(self.mean, self.std),
            ..self.clone()
        }
    }
}

/// Receives a notification each time a search's running best improves.
pub trait SearchObserver {
    fn on_new_best(&mut self, candidate: &Candidate);
}

impl<F: FnMut(&Candidate)> SearchObserver for F {
    fn on_new_best(&mut self, candidate: &Candidate) {
        self(candidate)
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_new_best(&mut self, _candidate: &Candidate) {}
}

/// Result of a cross-compound search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub scoring: Scoring,
    pub best: Candidate,
    /// Every candidate, ascending by score (stable: grid order on ties).
    pub ranked: Vec<Candidate>,
    /// Each running-best improvement in grid order; the last one is `best`.
    pub improvements: Vec<Candidate>,
}

impl SearchOutcome {
    /// The `k` best candidates.
    pub fn top(&self, k: usize) -> &[Candidate] {
        &self.ranked[..k.min(self.ranked.len())]
    }
}

/// Best pit lap for a fixed compound pair, scored by mean race time.
pub fn find_best_one_stop(
    params: &RaceParams,
    tires: &TireModels,
    first: Compound,
    second: Compound,
    window: PitWindow,
    trials: usize,
    observer: &mut dyn SearchObserver,
) -> Result<Candidate, SimError> {
    let pairs = [CompoundPair::new(first, second)];
    let candidates = evaluate_grid(params, tires, &pairs, window, trials, Scoring::Mean, Some(observer))?;
    select_best(&candidates)
}

/// Best (compound pair, pit lap) over `pairs`, scored by `mean + risk_lambda·std`.
pub fn find_best_one_stop_any_compounds(
    params: &RaceParams,
    tires: &TireModels,
    pairs: &[CompoundPair],
    window: PitWindow,
    trials: usize,
    risk_lambda: f64,
    observer: &mut dyn SearchObserver,
) -> Result<SearchOutcome, SimError> {
    let scoring = Scoring::risk_adjusted(risk_lambda)?;
    let candidates = evaluate_grid(params, tires, pairs, window, trials, scoring, Some(observer))?;
    outcome(scoring, candidates)
}

/// Run the cross-compound search once per risk lambda.
///
/// The grid is simulated once: scores for every lambda come from the same
/// fixed-seed estimates, which is what separate searches would compute.
/// Observer notifications are replayed per lambda, in lambda order, and each
/// outcome keeps its own improvements.
pub fn sweep_risk_lambdas(
    params: &RaceParams,
    tires: &TireModels,
    pairs: &[CompoundPair],
    window: PitWindow,
    trials: usize,
    lambdas: &[f64],
    observer: &mut dyn SearchObserver,
) -> Result<Vec<SearchOutcome>, SimError> {
    let scorings = lambdas
        .iter()
        .map(|&l| Scoring::risk_adjusted(l))
        .collect::<Result<Vec<_>, _>>()?;

    let base = evaluate_grid(params, tires, pairs, window, trials, Scoring::Mean, None)?;

    let mut outcomes = Vec::with_capacity(scorings.len());
    for scoring in scorings {
        let candidates: Vec<Candidate> = base.iter().map(|c| c.rescored(scoring)).collect();
        let outcome = outcome(scoring, candidates)?;
        for c in &outcome.improvements {
            notify(c, &mut *observer);
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn evaluate_grid(
    params: &RaceParams,
    tires: &TireModels,
    pairs: &[CompoundPair],
    window: PitWindow,
    trials: usize,
    scoring: Scoring,
    mut observer: Option<&mut dyn SearchObserver>,
) -> Result<Vec<Candidate>, SimError> {
    if pairs.is_empty() {
        return Err(SimError::EmptySearchSpace);
    }
    params.validate()?;
    tires.validate()?;

    let grid = one_stop_grid(pairs, window);
    let mut candidates: Vec<Candidate> = Vec::with_capacity(grid.len());
    let mut best_score: Option<f64> = None;

    for (pair, pit_lap) in grid {
        let candidate = evaluate_one_stop(params, tires, pair, pit_lap, trials, scoring)?;
        if best_score.is_none_or(|b| candidate.score < b) {
            best_score = Some(candidate.score);
            if let Some(observer) = observer.as_deref_mut() {
                notify(&candidate, observer);
            }
        }
        candidates.push(candidate);
    }

    Ok(candidates)
}

fn evaluate_one_stop(
    params: &RaceParams,
    tires: &TireModels,
    pair: CompoundPair,
    pit_lap: u32,
    trials: usize,
    scoring: Scoring,
) -> Result<Candidate, SimError> {
    let strategy = one_stop(params, pit_lap, pair.first, pair.second)?;

    let started = Instant::now();
    let mc = monte_carlo(params, &strategy, trials, SEARCH_SEED, tires)?;
    debug!(
        strategy = %strategy.name,
        elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
        "candidate evaluated"
    );

    Ok(Candidate {
        pair,
        pit_lap,
        name: strategy.name,
        mean: mc.mean,
        std: mc.std,
        scoring,
        score: scoring.score(mc.mean, mc.std),
    })
}

/// Running-minimum scan in grid order; ties keep the earliest candidate.
fn running_bests(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut bests: Vec<Candidate> = Vec::new();
    for c in candidates {
        if bests.last().is_none_or(|b| c.score < b.score) {
            bests.push(c.clone());
        }
    }
    bests
}

fn select_best(candidates: &[Candidate]) -> Result<Candidate, SimError> {
    running_bests(candidates).pop().ok_or(SimError::EmptySearchSpace)
}

fn notify(candidate: &Candidate, observer: &mut dyn SearchObserver) {
    info!(
        strategy = %candidate.name,
        scoring = %candidate.scoring,
        score = candidate.score,
        mean = candidate.mean,
        std = candidate.std,
        "new best"
    );
    observer.on_new_best(candidate);
}

fn outcome(scoring: Scoring, candidates: Vec<Candidate>) -> Result<SearchOutcome, SimError> {
    let improvements = running_bests(&candidates);
    let best = improvements.last().cloned().ok_or(SimError::EmptySearchSpace)?;
    let mut ranked = candidates;
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    Ok(SearchOutcome {
        scoring,
        best,
        ranked,
        improvements,
    })
}
