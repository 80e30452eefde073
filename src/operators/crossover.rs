use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Single-point crossover between two parents.
///
/// The crossover point is drawn uniformly from `[1, n_genes - 1]`, so it is
/// always strictly interior and every application exchanges a real prefix.
/// For individuals with fewer than two genes there is no interior point and
/// the operator is a no-op.
#[derive(Debug, Clone, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    /// Swaps the gene prefixes of the two parents up to (exclusive of) a
    /// random interior point.
    ///
    /// Returns the chosen point, or `None` when the genes are too short to
    /// have one. Both parents must have the same genes length.
    pub fn recombine(
        &self,
        first: &mut Individual,
        second: &mut Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Option<usize> {
        debug_assert_eq!(first.genes.len(), second.genes.len());

        let n_genes = first.genes.len();
        if n_genes < 2 {
            return None;
        }

        let point = rng.range_inclusive(1, n_genes - 1);
        first.genes[..point].swap_with_slice(&mut second.genes[..point]);

        Some(point)
    }
}
