//! Operator traits
//!
//! This module defines the core operator traits for the evolutionary loop.

use rand::Rng;

use crate::error::OperatorError;
use crate::population::Population;

/// Crossover operator trait
///
/// Breeds `n_children` offspring from a parent population.
pub trait CrossoverOperator: Send + Sync {
    /// Produce `n_children` offspring from `parents`
    ///
    /// Must return an empty population when `n_children == 0`, without
    /// inspecting `parents`. With `n_children > 0`, implementations may
    /// require a minimum number of parents and fail otherwise.
    fn crossover<R: Rng>(
        &self,
        parents: &Population,
        n_children: usize,
        rng: &mut R,
    ) -> Result<Population, OperatorError>;
}

/// Mutation operator trait
///
/// Transforms a population into an equally sized mutated population.
pub trait MutationOperator: Send + Sync {
    /// Apply mutation to every member, preserving count and shape
    fn mutate<R: Rng>(&self, population: &Population, rng: &mut R) -> Population;
}
