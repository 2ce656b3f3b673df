//! Error types for latent-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for configuration problems
///
/// All variants are surfaced at startup and are fatal; there is no retry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Model identifier is not one of the supported kinds
    #[error("Unsupported model kind '{given}', expected one of {supported:?}")]
    UnsupportedModel {
        given: String,
        supported: &'static [&'static str],
    },

    /// Dataset identifier is not valid for the chosen model kind
    #[error("Unsupported dataset '{given}' for model '{model}', expected one of {supported:?}")]
    UnsupportedDataset {
        given: String,
        model: String,
        supported: &'static [&'static str],
    },

    /// A field that must be positive was zero
    #[error("'{field}' must be positive, got {value}")]
    NonPositive { field: &'static str, value: usize },

    /// Mutation probability outside [0, 1]
    #[error("'p_mutation' must be in [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),

    /// Config file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    Io { path: String, message: String },

    /// Config file could not be parsed
    #[error("Failed to parse config file '{path}': {message}")]
    Parse { path: String, message: String },
}

/// Error type for genetic operator failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    /// Crossover was asked for children but has fewer than two parents to draw from
    #[error("Crossover requires at least 2 parents, got {available}")]
    InsufficientParents { available: usize },
}

/// Top-level error type for an interactive evolution run
#[derive(Debug, Error)]
pub enum EvolveError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Operator error
    #[error("Operator error: {0}")]
    Operator(#[from] OperatorError),

    /// The model collaborator failed or broke its contract
    #[error("Model error: {0}")]
    Model(String),

    /// The presentation collaborator failed or broke its contract
    #[error("Presentation error: {0}")]
    Presentation(String),

    /// The selection mask is not index-aligned with the rendered images
    #[error("Selection mask length {mask_len} does not match {image_count} rendered images")]
    MaskLengthMismatch { mask_len: usize, image_count: usize },
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolveError>;
