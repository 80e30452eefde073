use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Independent per-gene bit-flip mutation.
///
/// Every gene of every individual flips with the configured probability,
/// independently of every other gene. Applied once per generation to the
/// freshly produced offspring, before they are re-scored.
#[derive(Debug, Clone)]
pub struct BitFlipMutation {
    rate: f64,
}

impl BitFlipMutation {
    /// Creates a mutation operator with the given per-gene flip probability.
    ///
    /// The rate is validated upstream as part of the engine options.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Mutates every individual in place. Cached fitness values are stale
    /// afterwards; the caller re-scores before reading them.
    pub fn apply(&self, offspring: &mut [Individual], rng: &mut RandomNumberGenerator) {
        for individual in offspring {
            let draws = rng.fetch_uniform(0.0, 1.0, individual.genes.len());
            for (gene, r) in individual.genes.iter_mut().zip(draws) {
                if r < self.rate {
                    *gene = !*gene;
                }
            }
        }
    }
}
