//! # latent-evo
//!
//! Interactive evolution over a generative model's latent space.
//!
//! A human steers the latent space of a pretrained generative model toward
//! images with desired traits: each generation the current population of
//! latent vectors is rendered to images, the user marks the ones worth
//! keeping, and genetic operators (uniform crossover, resampling mutation,
//! fresh random injection) compose the next population from the survivors.
//!
//! The generative model and the presentation layer are collaborators behind
//! the [`LatentDecoder`](interactive::LatentDecoder) and
//! [`Presenter`](interactive::Presenter) traits; the crate ships a
//! deterministic procedural decoder and a console presenter so the full loop
//! runs out of the box.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use latent_evo::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = EvolveConfig::default();
//! let decoder = PatternDecoder::new(config.model.latent_dim);
//! let presenter = ConsolePresenter::from_stdio();
//! let rng = StdRng::seed_from_u64(42);
//!
//! let mut evolution = InteractiveEvolution::new(&config, decoder, presenter, rng)?;
//! evolution.run()?;
//! ```

pub mod config;
pub mod error;
pub mod genome;
pub mod interactive;
pub mod operators;
pub mod population;
pub mod sampler;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{DisplayConfig, EvolutionConfig, EvolveConfig, ModelConfig};
    pub use crate::error::*;
    pub use crate::genome::Latent;
    pub use crate::interactive::{
        ConsolePresenter, GenerationPlan, Image, ImageBatch, InteractiveEvolution, LatentDecoder,
        PatternDecoder, Presenter, ScriptedPresenter, StepResult, Verdict,
    };
    pub use crate::operators::{
        CrossoverOperator, MutationOperator, ResampleMutation, UniformCrossover,
    };
    pub use crate::population::Population;
    pub use crate::sampler::LatentSampler;
}
