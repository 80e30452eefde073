use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Fitness-proportionate ("roulette wheel") selection of two distinct parents.
///
/// Each draw gives every candidate a slice of the wheel proportional to its
/// share of the total fitness. The first selected index is excluded from the
/// second draw, so the pair is sampled without replacement. When the total
/// fitness of the remaining candidates is exactly zero the wheel degenerates
/// to a uniform slice per candidate; this keeps selection well-defined when
/// every shifted fitness is zero (for example a population of identical
/// individuals) and is a defined fallback, not an error.
///
/// The fitness values fed in must be non-negative. The recombination step
/// guarantees this by shifting the population's fitness by its minimum before
/// selecting; raw knapsack fitness can be negative.
///
/// # Examples
///
/// ```
/// use knapga::selection::RouletteSelection;
/// use knapga::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let fitness = vec![5.0, 3.0, 2.0, 0.0];
///
/// let (first, second) = RouletteSelection.select_pair(&fitness, &mut rng).unwrap();
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouletteSelection;

impl RouletteSelection {
    /// Selects two distinct parent indices from the given fitness values.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two candidates are given or if any
    /// fitness value is negative.
    pub fn select_pair(
        &self,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(usize, usize)> {
        if fitness.len() < 2 {
            return Err(GeneticError::Configuration(format!(
                "Roulette selection needs at least 2 candidates, got {}",
                fitness.len()
            )));
        }

        if fitness.iter().any(|&f| f < 0.0) {
            return Err(GeneticError::Configuration(
                "Roulette selection requires non-negative fitness values; shift by the population minimum first"
                    .to_string(),
            ));
        }

        let first = self.spin(fitness, None, rng)?;
        let second = self.spin(fitness, Some(first), rng)?;

        Ok((first, second))
    }

    /// Spins the wheel once over the non-excluded candidates.
    fn spin(
        &self,
        fitness: &[f64],
        exclude: Option<usize>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        let remaining = fitness.len() - usize::from(exclude.is_some());
        let total: f64 = fitness
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != exclude)
            .map(|(_, &f)| f)
            .sum();

        let r = rng.uniform();
        let mut cumulative = 0.0;
        let mut last = None;

        for (i, &f) in fitness.iter().enumerate() {
            if Some(i) == exclude {
                continue;
            }

            cumulative += if total == 0.0 {
                1.0 / remaining as f64
            } else {
                f / total
            };
            last = Some(i);

            if r < cumulative {
                return Ok(i);
            }
        }

        // Floating-point accumulation can leave the final cumulative fraction
        // a hair under 1.0; the draw then falls through to the last candidate.
        last.ok_or(GeneticError::EmptyPopulation)
    }
}
