//! # Error Types
//!
//! This module defines custom error types for the genetic algorithm engine.
//! It provides specific error variants for the failure scenarios that may
//! occur while configuring or running a search.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use knapga::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the genetic algorithm engine.
///
/// Invalid configuration is rejected at construction time, never discovered
/// mid-run. Fitness provider failures are propagated without retries since
/// evaluation is deterministic and stateless.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness calculation fails.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when NaN or infinity values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
///
/// ## Examples
///
/// ```rust
/// use knapga::error::{GeneticError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GeneticError>;
