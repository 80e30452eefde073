use crate::population::Population;

/// Elitist replacement: the best of the previous generation survive alongside
/// the best offspring.
///
/// With `n_elites = ceil(elitism_rate * population_size)`, the surviving
/// generation is the top `n_elites` members of the previous population plus
/// the top `population_size - n_elites` offspring. Both inputs must already be
/// sorted by descending fitness; the merged result carries no ordering claim
/// and is scored-and-sorted by the caller before the next generation starts.
#[derive(Debug, Clone)]
pub struct Elitism {
    n_elites: usize,
}

impl Elitism {
    /// Derives the elite count from the configured rate and population size.
    ///
    /// Ceiling rounding means any nonzero rate preserves at least one elite;
    /// rate 1.0 preserves the whole previous generation.
    pub fn new(elitism_rate: f64, population_size: usize) -> Self {
        let n_elites = (elitism_rate * population_size as f64).ceil() as usize;
        Self {
            n_elites: n_elites.min(population_size),
        }
    }

    pub fn n_elites(&self) -> usize {
        self.n_elites
    }

    /// Builds the surviving generation from a sorted previous population and
    /// sorted offspring.
    pub fn merge(&self, previous: &Population, offspring: &Population) -> Population {
        let survivors = previous
            .members()
            .iter()
            .take(self.n_elites)
            .chain(
                offspring
                    .members()
                    .iter()
                    .take(previous.len().saturating_sub(self.n_elites)),
            )
            .cloned()
            .collect();

        Population::new(survivors)
    }
}
