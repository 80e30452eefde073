pub mod roulette;

pub use roulette::RouletteSelection;
