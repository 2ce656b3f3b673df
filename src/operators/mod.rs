//! Genetic operators
//!
//! Crossover and mutation transforms over latent populations. Selection is
//! not an operator here: survivors are whatever the human marked in the
//! presentation layer.

pub mod crossover;
pub mod mutation;
pub mod traits;

pub use crossover::UniformCrossover;
pub use mutation::ResampleMutation;
pub use traits::{CrossoverOperator, MutationOperator};
