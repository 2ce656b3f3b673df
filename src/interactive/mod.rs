//! Interactive evolution
//!
//! The per-generation controller and its two collaborator seams: the model
//! collaborator ([`LatentDecoder`]) renders latents to images, and the
//! presentation collaborator ([`Presenter`]) shows them and collects the
//! human's verdict.

pub mod algorithm;
pub mod decoder;
pub mod presenter;

pub use algorithm::{GenerationPlan, InteractiveEvolution, StepResult};
pub use decoder::{Image, ImageBatch, LatentDecoder, PatternDecoder};
pub use presenter::{ConsolePresenter, Presenter, ScriptedPresenter, Verdict};
