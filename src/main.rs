use std::path::Path;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use latent_evo::config::EvolveConfig;
use latent_evo::interactive::{ConsolePresenter, InteractiveEvolution, PatternDecoder};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = if Path::new(&args.config).exists() {
        EvolveConfig::load(&args.config)
            .with_context(|| format!("loading config from {}", args.config))?
    } else {
        log::warn!("config file '{}' not found, using defaults", args.config);
        EvolveConfig::default()
    };

    let rng = match config.evolution.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Procedural stand-in for the generative backend; a real model plugs in
    // through the LatentDecoder trait.
    let decoder = PatternDecoder::new(config.model.latent_dim);
    log::info!(
        "model: {} / {} (procedural preview backend, latent dimension {})",
        config.model.kind,
        config.model.dataset,
        config.model.latent_dim
    );

    let presenter = ConsolePresenter::from_stdio()
        .with_columns(config.display.columns)
        .with_color_preview(config.display.color_preview);

    let mut evolution = InteractiveEvolution::new(&config, decoder, presenter, rng)
        .context("setting up the evolution loop")?;
    evolution.run().context("running the evolution loop")?;

    log::info!(
        "session ended after {} generation transitions",
        evolution.generation()
    );
    Ok(())
}
