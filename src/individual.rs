//! # Individual
//!
//! An `Individual` is one candidate solution: a fixed-length binary choice
//! vector together with its cached fitness. The cached value is only
//! authoritative as long as the genes have not changed since the last scoring;
//! operators that modify genes rely on the caller to re-score afterwards.

use std::cmp::Ordering;

/// One candidate solution in the population.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// The binary choice vector, length = number of decision variables.
    pub genes: Vec<bool>,
    /// The fitness score cached from the last evaluation of `genes`.
    pub fitness: f64,
}

impl Individual {
    /// Creates an individual from a genes vector and its fitness score.
    pub fn new(genes: Vec<bool>, fitness: f64) -> Self {
        Self { genes, fitness }
    }

    /// Compares two individuals so that higher fitness sorts first.
    ///
    /// NaN fitness values sort last regardless of position, so a population
    /// containing one still has a total order.
    pub fn descending_fitness(a: &Self, b: &Self) -> Ordering {
        b.fitness.partial_cmp(&a.fitness).unwrap_or_else(|| {
            if b.fitness.is_nan() {
                Ordering::Less
            } else if a.fitness.is_nan() {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
    }
}
