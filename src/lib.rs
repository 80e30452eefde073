pub mod engine;
pub mod error;
pub mod harness;
pub mod individual;
pub mod knapsack;
pub mod objective;
pub mod operators;
pub mod population;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use engine::{GaOptions, GeneticEngine};
pub use error::{GeneticError, Result};
pub use individual::Individual;
pub use knapsack::Knapsack;
pub use objective::Objective;
pub use population::Population;
pub use rng::RandomNumberGenerator;
