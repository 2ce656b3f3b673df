//! Interactive evolution controller
//!
//! Owns the population and drives one render → present → recompose cycle per
//! generation, looping until the human asks to stop. Single-threaded and
//! synchronous: the only blocking point is the presenter, which waits
//! indefinitely for human input.

use rand::Rng;

use crate::config::EvolveConfig;
use crate::error::{EvoResult, EvolveError};
use crate::interactive::decoder::{ImageBatch, LatentDecoder};
use crate::interactive::presenter::Presenter;
use crate::operators::{
    CrossoverOperator, MutationOperator, ResampleMutation, UniformCrossover,
};
use crate::population::Population;
use crate::sampler::LatentSampler;

/// Composition of one non-terminal generation transition
///
/// `n_crossover = max(0, n_population - n_selected - n_new)`, forced to zero
/// for a single survivor (uniform crossover needs two distinct parents), and
/// `n_fresh` backfills whatever remains, so the three parts always sum to
/// `n_population`. With one survivor `n_fresh` exceeds the configured
/// `n_new`; that backfill is intended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationPlan {
    /// Survivors carried forward (mutated in place)
    pub n_selected: usize,
    /// Children bred from the survivors
    pub n_crossover: usize,
    /// Freshly sampled individuals
    pub n_fresh: usize,
}

impl GenerationPlan {
    /// Compute the next generation's composition
    ///
    /// Requires `1 <= n_selected <= n_population`; the zero-selection case is
    /// a restart and never reaches this arithmetic.
    pub fn compose(n_population: usize, n_selected: usize, n_new: usize) -> Self {
        debug_assert!(n_selected >= 1);
        debug_assert!(n_selected <= n_population);

        let n_crossover = if n_selected == 1 {
            0
        } else {
            n_population.saturating_sub(n_selected).saturating_sub(n_new)
        };
        let n_fresh = n_population - n_selected - n_crossover;

        Self {
            n_selected,
            n_crossover,
            n_fresh,
        }
    }

    /// Total size of the composed population
    pub fn total(&self) -> usize {
        self.n_selected + self.n_crossover + self.n_fresh
    }
}

/// Outcome of one generation transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// Survivors, crossover children, and fresh samples were composed
    Evolved(GenerationPlan),
    /// The population was restarted from fresh samples (reset or nothing selected)
    Restarted,
    /// The user asked to stop; no next population was computed
    Halted,
}

/// The interactive evolution loop
///
/// Generic over the model collaborator `M`, the presentation collaborator
/// `P`, and the random source `R`, all owned for the duration of the run.
/// The population has exactly one owner (this controller) and is replaced
/// wholesale every generation.
pub struct InteractiveEvolution<M, P, R>
where
    M: LatentDecoder,
    P: Presenter,
    R: Rng,
{
    n_population: usize,
    n_new: usize,
    batch_size: usize,
    sampler: LatentSampler,
    crossover: UniformCrossover,
    mutation: ResampleMutation,
    decoder: M,
    presenter: P,
    rng: R,
    population: Population,
    generation: usize,
}

impl<M, P, R> InteractiveEvolution<M, P, R>
where
    M: LatentDecoder,
    P: Presenter,
    R: Rng,
{
    /// Validate the configuration and set up the initial population
    ///
    /// The latent dimensionality is queried from the model collaborator once,
    /// here, and stays fixed for the run.
    pub fn new(config: &EvolveConfig, decoder: M, presenter: P, mut rng: R) -> EvoResult<Self> {
        config.validate()?;

        let sampler = LatentSampler::new(decoder.latent_dimension());
        let population = sampler.sample(config.evolution.n_population, &mut rng);

        Ok(Self {
            n_population: config.evolution.n_population,
            n_new: config.evolution.n_new,
            batch_size: config.evolution.batch_size,
            sampler,
            crossover: UniformCrossover::new(),
            mutation: ResampleMutation::new(config.evolution.p_mutation),
            decoder,
            presenter,
            rng,
            population,
            generation: 0,
        })
    }

    /// The current population
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Completed generation transitions (evolutions and restarts)
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The presentation collaborator
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Render the whole population in fixed-size batches
    ///
    /// Batches are processed strictly sequentially and concatenated in
    /// submission order.
    fn render_all(&self) -> EvoResult<ImageBatch> {
        let mut images = ImageBatch::with_capacity(self.population.len());
        for chunk in self.population.members().chunks(self.batch_size) {
            let batch = Population::from_members(chunk.to_vec());
            let rendered = self.decoder.render(&batch)?;
            if rendered.len() != chunk.len() {
                return Err(EvolveError::Model(format!(
                    "decoder returned {} images for a batch of {}",
                    rendered.len(),
                    chunk.len()
                )));
            }
            images.extend(rendered);
        }
        Ok(images)
    }

    fn restart(&mut self) -> StepResult {
        self.population = self.sampler.sample(self.n_population, &mut self.rng);
        self.generation += 1;
        log::info!(
            "generation {}: restarted with {} fresh individuals",
            self.generation,
            self.n_population
        );
        StepResult::Restarted
    }

    /// Run one generation transition
    pub fn step(&mut self) -> EvoResult<StepResult> {
        let images = self.render_all()?;
        let verdict = self.presenter.present(&images)?;

        if verdict.exit {
            log::info!("generation {}: exit requested", self.generation);
            return Ok(StepResult::Halted);
        }
        if verdict.reset {
            return Ok(self.restart());
        }

        if verdict.mask.len() != images.len() {
            return Err(EvolveError::MaskLengthMismatch {
                mask_len: verdict.mask.len(),
                image_count: images.len(),
            });
        }

        let n_selected = verdict.selected_count();
        if n_selected == 0 {
            return Ok(self.restart());
        }

        let survivors = self.population.select(&verdict.mask);
        let plan = GenerationPlan::compose(self.n_population, n_selected, self.n_new);

        let children = self
            .crossover
            .crossover(&survivors, plan.n_crossover, &mut self.rng)?;
        let mutated_survivors = self.mutation.mutate(&survivors, &mut self.rng);
        let fresh = self.sampler.sample(plan.n_fresh, &mut self.rng);

        let mut next = mutated_survivors;
        next.extend(children);
        next.extend(fresh);
        debug_assert_eq!(next.len(), self.n_population);

        self.population = next;
        self.generation += 1;
        log::info!(
            "generation {}: {} survivors, {} crossover children, {} fresh",
            self.generation,
            plan.n_selected,
            plan.n_crossover,
            plan.n_fresh
        );

        Ok(StepResult::Evolved(plan))
    }

    /// Drive generation transitions until the user exits
    ///
    /// Open-ended on purpose: no generation limit and no convergence
    /// criterion, only the exit signal ends the run.
    pub fn run(&mut self) -> EvoResult<()> {
        log::info!(
            "starting interactive evolution: population {}, latent dimension {}",
            self.n_population,
            self.sampler.dimension()
        );
        loop {
            if self.step()? == StepResult::Halted {
                return Ok(());
            }
        }
    }
}
