//! Configuration
//!
//! TOML-backed configuration with startup validation. Defaults mirror a small
//! interactive session: 20 individuals, 2 fresh injections per generation,
//! mutation probability 0.5, inference batches of 4.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Model kinds the pretrained-model loader accepts
pub const SUPPORTED_MODELS: &[&str] = &["PGAN", "DCGAN"];

/// Datasets available for the PGAN kind (DCGAN ignores the dataset)
pub const PGAN_DATASETS: &[&str] = &["celebAHQ-256", "celebAHQ-512", "DTD", "celeba"];

/// Generative model selection
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model kind, one of [`SUPPORTED_MODELS`]
    pub kind: String,
    /// Dataset the weights were trained on; validated for PGAN only
    pub dataset: String,
    /// Latent dimensionality used by the built-in procedural decoder.
    /// A real model backend reports its own dimensionality instead.
    pub latent_dim: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            kind: "PGAN".to_string(),
            dataset: "celebAHQ-512".to_string(),
            latent_dim: 512,
        }
    }
}

impl ModelConfig {
    /// Validate the model selection
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_MODELS.contains(&self.kind.as_str()) {
            return Err(ConfigError::UnsupportedModel {
                given: self.kind.clone(),
                supported: SUPPORTED_MODELS,
            });
        }
        if self.kind == "PGAN" && !PGAN_DATASETS.contains(&self.dataset.as_str()) {
            return Err(ConfigError::UnsupportedDataset {
                given: self.dataset.clone(),
                model: self.kind.clone(),
                supported: PGAN_DATASETS,
            });
        }
        if self.latent_dim == 0 {
            return Err(ConfigError::NonPositive {
                field: "latent_dim",
                value: self.latent_dim,
            });
        }
        Ok(())
    }
}

/// Evolutionary-loop parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Population size, constant across a run
    pub n_population: usize,
    /// Target number of freshly injected individuals per generation
    pub n_new: usize,
    /// Per-level mutation probability (compounded per coordinate, see
    /// [`ResampleMutation`](crate::operators::ResampleMutation))
    pub p_mutation: f64,
    /// Inference batch size; bounds peak model work, not concurrency
    pub batch_size: usize,
    /// Optional seed for all randomness; entropy-seeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            n_population: 20,
            n_new: 2,
            p_mutation: 0.5,
            batch_size: 4,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Validate the evolutionary-loop parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_population == 0 {
            return Err(ConfigError::NonPositive {
                field: "n_population",
                value: self.n_population,
            });
        }
        if self.batch_size == 0 {
            return Err(ConfigError::NonPositive {
                field: "batch_size",
                value: self.batch_size,
            });
        }
        if !(0.0..=1.0).contains(&self.p_mutation) {
            return Err(ConfigError::ProbabilityOutOfRange(self.p_mutation));
        }
        Ok(())
    }
}

/// Console presentation settings
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of images per grid row
    pub columns: usize,
    /// ANSI color preview grid when true, plain textual prompt when false
    pub color_preview: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns: 5,
            color_preview: true,
        }
    }
}

impl DisplayConfig {
    /// Validate the presentation settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::NonPositive {
                field: "columns",
                value: self.columns,
            });
        }
        Ok(())
    }
}

/// Complete configuration for an interactive evolution run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolveConfig {
    pub model: ModelConfig,
    pub evolution: EvolutionConfig,
    pub display: DisplayConfig,
}

impl EvolveConfig {
    /// Validate every section; fatal at startup, no retry
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()?;
        self.evolution.validate()?;
        self.display.validate()?;
        Ok(())
    }

    /// Load and validate a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: EvolveConfig = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }
}
