use tracing::{debug, info};

use super::options::GaOptions;
use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::objective::Objective;
use crate::operators::{BitFlipMutation, Elitism, SinglePointCrossover};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::RouletteSelection;

/// The generational genetic algorithm engine.
///
/// Owns the stochastic operators and drives the generation loop: initialize,
/// then per generation recombine, mutate, score-and-sort the offspring, merge
/// elites with the previous population and score-and-sort the result. The
/// loop always runs the full generation budget; the only termination control
/// is the configured generation count.
///
/// A run is deterministic given a seeded [`RandomNumberGenerator`] and a
/// deterministic objective. Each call to [`GeneticEngine::run`] performs a
/// fresh initialization, so the engine can be reused across repetitions as
/// long as every repetition gets its own generator instance.
///
/// # Examples
///
/// ```rust
/// use knapga::engine::{GaOptions, GeneticEngine};
/// use knapga::knapsack;
/// use knapga::rng::RandomNumberGenerator;
///
/// let options = GaOptions::builder()
///     .population_size(20)
///     .generations(200)
///     .build()
///     .unwrap();
///
/// let problem = knapsack::benchmark(3).unwrap();
/// let n_genes = problem.n_items();
/// let engine = GeneticEngine::new(options, problem, n_genes).unwrap();
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let best = engine.run(&mut rng).unwrap();
/// assert_eq!(best.genes.len(), n_genes);
/// ```
#[derive(Debug)]
pub struct GeneticEngine<O: Objective> {
    options: GaOptions,
    objective: O,
    n_genes: usize,
    selection: RouletteSelection,
    crossover: SinglePointCrossover,
    mutation: BitFlipMutation,
    elitism: Elitism,
}

impl<O: Objective> GeneticEngine<O> {
    /// Creates an engine for an objective over `n_genes` decision variables.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `n_genes` is zero.
    pub fn new(options: GaOptions, objective: O, n_genes: usize) -> Result<Self> {
        if n_genes == 0 {
            return Err(GeneticError::Configuration(
                "Number of genes must be at least 1".to_string(),
            ));
        }

        let mutation = BitFlipMutation::new(options.mutation_rate());
        let elitism = Elitism::new(options.elitism_rate(), options.population_size());

        Ok(Self {
            options,
            objective,
            n_genes,
            selection: RouletteSelection,
            crossover: SinglePointCrossover,
            mutation,
            elitism,
        })
    }

    pub fn options(&self) -> &GaOptions {
        &self.options
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Runs the full generation loop and returns the best individual found.
    ///
    /// # Errors
    ///
    /// Returns an error if the objective fails to score a genes vector or
    /// produces a non-finite value.
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<Individual> {
        info!(
            population_size = self.options.population_size(),
            generations = self.options.generations(),
            n_genes = self.n_genes,
            "starting run"
        );

        let mut population = self.generate_population(rng)?;

        for generation in 1..=self.options.generations() {
            let mut offspring = self.recombine(&population, rng)?;
            self.mutation.apply(&mut offspring, rng);
            let offspring = Population::new(offspring).score_and_sort(&self.objective)?;

            population = self
                .elitism
                .merge(&population, &offspring)
                .score_and_sort(&self.objective)?;

            if let Some(best) = population.best() {
                debug!(generation, best_fitness = best.fitness, "generation complete");
            }
        }

        let best = population
            .best()
            .cloned()
            .ok_or(GeneticError::EmptyPopulation)?;

        info!(best_fitness = best.fitness, "run complete");
        Ok(best)
    }

    /// Draws a random genes vector and scores it.
    fn generate_individual(&self, rng: &mut RandomNumberGenerator) -> Result<Individual> {
        let genes: Vec<bool> = (0..self.n_genes).map(|_| rng.random_bit()).collect();
        let fitness = self.objective.score(&genes)?;
        Ok(Individual::new(genes, fitness))
    }

    /// Builds the initial population, sorted by descending fitness.
    fn generate_population(&self, rng: &mut RandomNumberGenerator) -> Result<Population> {
        let members = (0..self.options.population_size())
            .map(|_| self.generate_individual(rng))
            .collect::<Result<Vec<_>>>()?;

        Population::new(members).score_and_sort(&self.objective)
    }

    /// Produces one generation's offspring.
    ///
    /// Fitness is shifted by the population minimum so the proportionate
    /// selection always sees non-negative values, then mating events fill the
    /// offspring slots pairwise. An odd population size drops the second
    /// child of the final event.
    fn recombine(
        &self,
        population: &Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        let shifted = population.shifted_fitness();
        let n = self.options.population_size();
        let mut offspring = Vec::with_capacity(n);

        while offspring.len() < n {
            let (first, second) = self.selection.select_pair(&shifted, rng)?;
            let mut first = population.members()[first].clone();
            let mut second = population.members()[second].clone();

            if rng.uniform() < self.options.crossover_rate() {
                let _ = self.crossover.recombine(&mut first, &mut second, rng);
            }

            offspring.push(first);
            if offspring.len() < n {
                offspring.push(second);
            }
        }

        Ok(offspring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct CountOnes;

    impl Objective for CountOnes {
        fn score(&self, genes: &[bool]) -> Result<f64> {
            Ok(genes.iter().filter(|&&g| g).count() as f64)
        }
    }

    fn small_options(generations: usize) -> GaOptions {
        GaOptions::builder()
            .population_size(10)
            .generations(generations)
            .crossover_rate(0.85)
            .mutation_rate(0.05)
            .elitism_rate(0.1)
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_rejects_zero_genes() {
        let result = GeneticEngine::new(small_options(10), CountOnes, 0);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_generate_population_is_sorted() {
        let engine = GeneticEngine::new(small_options(10), CountOnes, 16).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let population = engine.generate_population(&mut rng).unwrap();

        assert_eq!(population.len(), 10);
        for pair in population.members().windows(2) {
            assert!(pair[0].fitness >= pair[1].fitness);
        }
    }

    #[test]
    fn test_recombine_keeps_population_size() {
        let engine = GeneticEngine::new(small_options(10), CountOnes, 8).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let population = engine.generate_population(&mut rng).unwrap();

        let offspring = engine.recombine(&population, &mut rng).unwrap();
        assert_eq!(offspring.len(), 10);
    }

    #[test]
    fn test_recombine_handles_odd_population_size() {
        let options = GaOptions::builder()
            .population_size(7)
            .generations(5)
            .build()
            .unwrap();
        let engine = GeneticEngine::new(options, CountOnes, 8).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let population = engine.generate_population(&mut rng).unwrap();

        let offspring = engine.recombine(&population, &mut rng).unwrap();
        assert_eq!(offspring.len(), 7);
    }

    #[test]
    fn test_run_finds_all_ones_on_easy_objective() {
        // Maximizing the number of set bits has no constraint; a short run
        // should reach the all-ones optimum on 8 genes.
        let engine = GeneticEngine::new(small_options(100), CountOnes, 8).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let best = engine.run(&mut rng).unwrap();
        assert_eq!(best.fitness, 8.0);
        assert!(best.genes.iter().all(|&g| g));
    }

    #[test]
    fn test_run_is_reproducible_with_same_seed() {
        let engine = GeneticEngine::new(small_options(30), CountOnes, 12).unwrap();

        let mut rng1 = RandomNumberGenerator::from_seed(1234);
        let mut rng2 = RandomNumberGenerator::from_seed(1234);

        let best1 = engine.run(&mut rng1).unwrap();
        let best2 = engine.run(&mut rng2).unwrap();

        assert_eq!(best1.genes, best2.genes);
        assert_eq!(best1.fitness, best2.fitness);
    }

    #[test]
    fn test_run_propagates_objective_failures() {
        #[derive(Debug)]
        struct Failing;

        impl Objective for Failing {
            fn score(&self, _genes: &[bool]) -> Result<f64> {
                Err(GeneticError::FitnessCalculation("provider failure".to_string()))
            }
        }

        let engine = GeneticEngine::new(small_options(10), Failing, 8).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let result = engine.run(&mut rng);
        assert!(matches!(result, Err(GeneticError::FitnessCalculation(_))));
    }

    #[test]
    fn test_full_elitism_freezes_population() {
        // With the whole population preserved as elites, offspring never
        // enter and the final best equals the initial best.
        let options = GaOptions::builder()
            .population_size(10)
            .generations(25)
            .elitism_rate(1.0)
            .build()
            .unwrap();
        let engine = GeneticEngine::new(options, CountOnes, 10).unwrap();

        let mut rng = RandomNumberGenerator::from_seed(7);
        let initial_best = engine
            .generate_population(&mut RandomNumberGenerator::from_seed(7))
            .unwrap()
            .best()
            .unwrap()
            .clone();

        let best = engine.run(&mut rng).unwrap();
        assert_eq!(best.genes, initial_best.genes);
        assert_eq!(best.fitness, initial_best.fitness);
    }
}
