pub mod engine;
pub mod options;

pub use engine::GeneticEngine;
pub use options::{GaOptions, GaOptionsBuilder};
