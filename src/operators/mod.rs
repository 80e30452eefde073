pub mod crossover;
pub mod elitism;
pub mod mutation;

pub use crossover::SinglePointCrossover;
pub use elitism::Elitism;
pub use mutation::BitFlipMutation;
