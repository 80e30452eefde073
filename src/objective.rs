use crate::error::Result;

/// The scoring boundary between the engine and the problem being solved.
///
/// Implementations must be pure: scoring the same genes vector twice yields
/// identical results. Failures (for example a genes vector of the wrong
/// length) are propagated as errors, never retried.
pub trait Objective {
    fn score(&self, genes: &[bool]) -> Result<f64>;
}
