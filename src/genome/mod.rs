//! Genome types
//!
//! The only genome in this crate is the [`Latent`] vector: a fixed-length
//! real-valued vector consumed by the generative model to produce one image.

pub mod latent;

pub use latent::Latent;
