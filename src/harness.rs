//! # Reporting harness
//!
//! A thin driver around the core engine: it repeats independent runs,
//! aggregates mean/best/worst statistics, and knows how to do that for the
//! benchmark dataset table. Repetitions are independent searches and execute
//! in parallel, each with its own random engine instance; the core loop
//! itself stays sequential.

use rayon::prelude::*;
use tracing::info;

use crate::engine::{GaOptions, GeneticEngine};
use crate::error::{GeneticError, Result};
use crate::knapsack;
use crate::objective::Objective;
use crate::rng::RandomNumberGenerator;

/// Aggregate statistics over the best fitness of repeated runs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub mean: f64,
    pub best: f64,
    pub worst: f64,
}

impl RunStats {
    /// Computes mean, best and worst over a set of samples.
    ///
    /// Returns `None` for an empty sample set.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let first = *samples.first()?;
        let mut best = first;
        let mut worst = first;
        let mut total = 0.0;

        for &sample in samples {
            total += sample;
            if sample > best {
                best = sample;
            }
            if sample < worst {
                worst = sample;
            }
        }

        Some(Self {
            mean: total / samples.len() as f64,
            best,
            worst,
        })
    }
}

/// The outcome of repeated runs over one benchmark dataset.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub dataset: usize,
    pub optimum: f64,
    pub stats: RunStats,
}

/// Repeats independent runs of the engine and returns the best fitness of
/// each run.
///
/// Runs execute in parallel. With `base_seed` set, run `k` uses a generator
/// seeded with `base_seed + k`, making the whole repetition deterministic;
/// without it every run seeds from entropy.
///
/// # Errors
///
/// Returns a configuration error for zero runs, and propagates any engine
/// failure.
pub fn repeat_runs<O>(
    engine: &GeneticEngine<O>,
    n_runs: usize,
    base_seed: Option<u64>,
) -> Result<Vec<f64>>
where
    O: Objective + Sync,
{
    if n_runs == 0 {
        return Err(GeneticError::Configuration(
            "Number of runs must be at least 1".to_string(),
        ));
    }

    (0..n_runs)
        .into_par_iter()
        .map(|run| {
            let mut rng = match base_seed {
                Some(seed) => RandomNumberGenerator::from_seed(seed.wrapping_add(run as u64)),
                None => RandomNumberGenerator::new(),
            };
            engine.run(&mut rng).map(|best| best.fitness)
        })
        .collect()
}

/// Runs `n_runs` repetitions of the engine over one benchmark dataset and
/// aggregates the results.
pub fn run_benchmark(
    dataset: usize,
    options: &GaOptions,
    n_runs: usize,
    base_seed: Option<u64>,
) -> Result<BenchmarkReport> {
    let problem = knapsack::benchmark(dataset).ok_or_else(|| {
        GeneticError::Configuration(format!("Unknown benchmark dataset: {}", dataset))
    })?;
    let optimum = problem.optimum;
    let n_genes = problem.n_items();

    let engine = GeneticEngine::new(options.clone(), problem, n_genes)?;
    let best_per_run = repeat_runs(&engine, n_runs, base_seed)?;

    let stats = RunStats::from_samples(&best_per_run).ok_or_else(|| {
        GeneticError::Other("No run results to aggregate".to_string())
    })?;

    info!(
        dataset,
        optimum,
        mean = stats.mean,
        best = stats.best,
        worst = stats.worst,
        "benchmark complete"
    );

    Ok(BenchmarkReport {
        dataset,
        optimum,
        stats,
    })
}
