//! Crossover operator
//!
//! Uniform per-coordinate recombination of two parents into one child.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::Latent;
use crate::operators::traits::CrossoverOperator;
use crate::population::Population;

/// Uniform crossover over latent vectors
///
/// Each child is bred from two distinct parents sampled uniformly without
/// replacement. A per-coordinate boolean mask, true with probability 0.5,
/// decides which parent contributes each coordinate. This is a per-coordinate
/// pick, not a blend: every child coordinate equals one of its parents'.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformCrossover;

impl UniformCrossover {
    /// Create a new uniform crossover
    pub fn new() -> Self {
        Self
    }

    /// Recombine two parents into one child
    fn recombine<R: Rng>(&self, parent_a: &Latent, parent_b: &Latent, rng: &mut R) -> Latent {
        let coords = parent_a
            .coords()
            .iter()
            .zip(parent_b.coords())
            .map(|(&a, &b)| if rng.gen::<bool>() { a } else { b })
            .collect();
        Latent::new(coords)
    }
}

impl CrossoverOperator for UniformCrossover {
    fn crossover<R: Rng>(
        &self,
        parents: &Population,
        n_children: usize,
        rng: &mut R,
    ) -> Result<Population, OperatorError> {
        // Zero children short-circuits before any parent sampling; the
        // parent-count requirement only applies when children are bred.
        if n_children == 0 {
            return Ok(Population::empty());
        }
        if parents.len() < 2 {
            return Err(OperatorError::InsufficientParents {
                available: parents.len(),
            });
        }

        let mut children = Population::with_capacity(n_children);
        for _ in 0..n_children {
            let pair = rand::seq::index::sample(rng, parents.len(), 2);
            let child = self.recombine(&parents[pair.index(0)], &parents[pair.index(1)], rng);
            children.push(child);
        }

        Ok(children)
    }
}
