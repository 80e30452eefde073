//! # Population
//!
//! A `Population` is the ordered collection of individuals alive in one
//! generation. The ordering invariant is established by [`Population::score_and_sort`]:
//! after it returns, members are sorted by descending fitness and every cached
//! fitness agrees with the objective. Construction via [`Population::new`]
//! makes no ordering claim; callers score-and-sort before reading ranks.

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::objective::Objective;

/// The set of individuals alive in one generation.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Individual>,
}

impl Population {
    /// Creates a population from a vector of individuals.
    ///
    /// The member order is unspecified until the next [`Population::score_and_sort`].
    pub fn new(members: Vec<Individual>) -> Self {
        Self { members }
    }

    /// Re-scores every member through the objective and returns the population
    /// sorted by descending fitness.
    ///
    /// This is the single operation that claims the ordering invariant, so the
    /// postcondition is visible at the call site rather than implied by a
    /// mutating helper.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty, if the objective fails for
    /// any member, or if a score is not finite.
    pub fn score_and_sort<O: Objective>(mut self, objective: &O) -> Result<Self> {
        if self.members.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        for member in &mut self.members {
            let score = objective.score(&member.genes)?;
            if !score.is_finite() {
                return Err(GeneticError::InvalidNumericValue(format!(
                    "Non-finite fitness score encountered: {}",
                    score
                )));
            }
            member.fitness = score;
        }

        self.members.sort_by(Individual::descending_fitness);
        Ok(self)
    }

    /// Returns the fitness of every member shifted by the population minimum,
    /// in member order.
    ///
    /// The shifted values are guaranteed non-negative, which is what
    /// fitness-proportionate selection requires even when raw fitness is
    /// negative (overweight knapsack solutions score below zero).
    pub fn shifted_fitness(&self) -> Vec<f64> {
        let worst = self
            .members
            .iter()
            .map(|m| m.fitness)
            .fold(f64::INFINITY, f64::min);

        self.members.iter().map(|m| m.fitness - worst).collect()
    }

    /// Returns the best-ranked member, if any.
    ///
    /// Only meaningful after [`Population::score_and_sort`].
    pub fn best(&self) -> Option<&Individual> {
        self.members.first()
    }

    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
