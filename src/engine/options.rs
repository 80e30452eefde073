//! # GaOptions
//!
//! The `GaOptions` struct represents the configuration of one search run:
//! population size, generation budget, and the crossover, mutation and
//! elitism rates. Options are immutable for the duration of a run and are
//! validated when built, so a malformed configuration is rejected before any
//! evolution starts rather than discovered mid-run.
//!
//! ## Example
//!
//! ```rust
//! use knapga::engine::GaOptions;
//!
//! let options = GaOptions::builder()
//!     .population_size(20)
//!     .generations(200)
//!     .crossover_rate(0.85)
//!     .mutation_rate(0.03)
//!     .elitism_rate(0.05)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.n_elites(), 1);
//! ```

use crate::error::{GeneticError, Result};

/// Configuration for a genetic algorithm run. Immutable once built.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct GaOptions {
    population_size: usize,
    generations: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    elitism_rate: f64,
}

impl GaOptions {
    /// Returns a builder for creating a `GaOptions` instance.
    pub fn builder() -> GaOptionsBuilder {
        GaOptionsBuilder::default()
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn elitism_rate(&self) -> f64 {
        self.elitism_rate
    }

    /// The number of elite survivors per generation, with ceiling rounding so
    /// any nonzero rate preserves at least one individual.
    pub fn n_elites(&self) -> usize {
        (self.elitism_rate * self.population_size as f64).ceil() as usize
    }
}

impl Default for GaOptions {
    /// The parameter set the benchmark driver historically used.
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 1000,
            crossover_rate: 0.85,
            mutation_rate: 0.03,
            elitism_rate: 0.05,
        }
    }
}

/// Builder for `GaOptions`.
///
/// Unset fields fall back to the defaults of [`GaOptions::default`]. The
/// `build` method validates the configuration.
#[derive(Debug, Clone, Default)]
pub struct GaOptionsBuilder {
    population_size: Option<usize>,
    generations: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    elitism_rate: Option<f64>,
}

impl GaOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the generation budget.
    pub fn generations(mut self, value: usize) -> Self {
        self.generations = Some(value);
        self
    }

    /// Sets the per-mating-event crossover probability.
    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the elitism fraction.
    pub fn elitism_rate(mut self, value: f64) -> Self {
        self.elitism_rate = Some(value);
        self
    }

    /// Builds the `GaOptions` instance.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the population size is below 2 (pair
    /// selection needs two distinct parents) or if any rate lies outside
    /// [0, 1].
    pub fn build(self) -> Result<GaOptions> {
        let defaults = GaOptions::default();
        let options = GaOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            generations: self.generations.unwrap_or(defaults.generations),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            elitism_rate: self.elitism_rate.unwrap_or(defaults.elitism_rate),
        };

        if options.population_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be at least 2, got {}",
                options.population_size
            )));
        }

        for (name, rate) in [
            ("crossover", options.crossover_rate),
            ("mutation", options.mutation_rate),
            ("elitism", options.elitism_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(GeneticError::Configuration(format!(
                    "The {} rate must be a probability in [0, 1], got {}",
                    name, rate
                )));
            }
        }

        Ok(options)
    }
}
