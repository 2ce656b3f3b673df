//! Mutation operator
//!
//! Coordinate-wise replacement with fresh standard-normal noise, gated by a
//! compound individual-level and coordinate-level probability.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::genome::Latent;
use crate::operators::traits::MutationOperator;
use crate::population::Population;

/// Resampling mutation over latent vectors
///
/// Two independent Bernoulli(`p_mutation`) masks are drawn: one per
/// individual and one per coordinate. A coordinate is replaced only when BOTH
/// its individual's draw and its own draw are true, so within a selected
/// individual the effective per-coordinate probability is `p_mutation²`, and
/// the overall fraction of replaced coordinates is about `p_mutation³`. The
/// conjunction is load-bearing: callers tune `p_mutation` against this
/// compounded rate, not against a flat per-coordinate rate.
///
/// Replacement draws an entirely new standard-normal value; it is not a
/// perturbation of the existing coordinate.
#[derive(Clone, Copy, Debug)]
pub struct ResampleMutation {
    /// Per-level mutation probability
    pub p_mutation: f64,
}

impl ResampleMutation {
    /// Create a new resampling mutation with the given per-level probability
    pub fn new(p_mutation: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&p_mutation),
            "Probability must be in [0, 1]"
        );
        Self { p_mutation }
    }
}

impl MutationOperator for ResampleMutation {
    fn mutate<R: Rng>(&self, population: &Population, rng: &mut R) -> Population {
        population
            .iter()
            .map(|member| {
                let individual_hit = rng.gen::<f64>() < self.p_mutation;
                let coords = member
                    .coords()
                    .iter()
                    .map(|&value| {
                        let coordinate_hit = rng.gen::<f64>() < self.p_mutation;
                        if individual_hit && coordinate_hit {
                            StandardNormal.sample(rng)
                        } else {
                            value
                        }
                    })
                    .collect();
                Latent::new(coords)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::sampler::LatentSampler;

    #[test]
    fn test_zero_probability_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let population = LatentSampler::new(16).sample(6, &mut rng);

        let mutated = ResampleMutation::new(0.0).mutate(&population, &mut rng);
        assert_eq!(mutated, population);
    }

    #[test]
    fn test_full_probability_replaces_every_coordinate() {
        let mut rng = StdRng::seed_from_u64(2);
        let population = LatentSampler::new(16).sample(6, &mut rng);

        let mutated = ResampleMutation::new(1.0).mutate(&population, &mut rng);

        for (original, replaced) in population.iter().zip(mutated.iter()) {
            for (o, r) in original.coords().iter().zip(replaced.coords()) {
                assert_ne!(o, r);
            }
        }
    }

    #[test]
    fn test_shape_preserved() {
        let mut rng = StdRng::seed_from_u64(3);
        let population = LatentSampler::new(12).sample(5, &mut rng);

        let mutated = ResampleMutation::new(0.5).mutate(&population, &mut rng);

        assert_eq!(mutated.len(), 5);
        assert!(mutated.iter().all(|m| m.dimension() == 12));
    }

    #[test]
    fn test_empty_population() {
        let mut rng = StdRng::seed_from_u64(4);
        let mutated = ResampleMutation::new(0.5).mutate(&Population::empty(), &mut rng);
        assert!(mutated.is_empty());
    }

    #[test]
    fn test_untouched_individuals_are_copied_verbatim() {
        let mut rng = StdRng::seed_from_u64(5);
        let population = LatentSampler::new(32).sample(40, &mut rng);

        let mutated = ResampleMutation::new(0.5).mutate(&population, &mut rng);

        // At p = 0.5 roughly half the individuals are never selected; those
        // must come through bit-identical.
        let untouched = population
            .iter()
            .zip(mutated.iter())
            .filter(|(o, m)| o == m)
            .count();
        assert!(untouched > 0);
    }

    // Pins the compound masking: the individual draw and the coordinate draw
    // are conjoined, so at p = 0.5 the expected replaced fraction is
    // 0.5³ = 0.125, not 0.5 or 0.25.
    #[test]
    fn test_compound_masking_rate() {
        let mut rng = StdRng::seed_from_u64(6);
        let population = LatentSampler::new(64).sample(200, &mut rng);

        let mutated = ResampleMutation::new(0.5).mutate(&population, &mut rng);

        let total = 200 * 64;
        let replaced: usize = population
            .iter()
            .zip(mutated.iter())
            .map(|(o, m)| {
                o.coords()
                    .iter()
                    .zip(m.coords())
                    .filter(|(a, b)| a != b)
                    .count()
            })
            .sum();
        let fraction = replaced as f64 / total as f64;
        assert!(
            (0.08..=0.17).contains(&fraction),
            "replaced fraction {} outside the p³ band",
            fraction
        );

        // Individual-level gate: about half the individuals have no replaced
        // coordinate at all.
        let touched = population
            .iter()
            .zip(mutated.iter())
            .filter(|(o, m)| o != m)
            .count();
        let touched_fraction = touched as f64 / 200.0;
        assert!(
            (0.35..=0.65).contains(&touched_fraction),
            "touched fraction {} outside the individual-gate band",
            touched_fraction
        );
    }
}
