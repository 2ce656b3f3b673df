//! Simulated Interactive Session
//!
//! Runs the full evolution loop without a human: a simulated user keeps the
//! brightest images each generation and exits after a fixed number of
//! generations. In a real session the console presenter collects these
//! verdicts from a person instead.

use latent_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Prefers bright images; keeps the top third of each batch by luminance
struct SimulatedUser {
    generations_left: usize,
}

impl Presenter for SimulatedUser {
    fn present(&mut self, images: &ImageBatch) -> EvoResult<Verdict> {
        if self.generations_left == 0 {
            return Ok(Verdict::exit());
        }
        self.generations_left -= 1;

        let mean: f64 =
            images.iter().map(Image::mean_luma).sum::<f64>() / images.len() as f64;
        println!(
            "  batch of {} images, mean luminance {:.3}",
            images.len(),
            mean
        );

        let mut ranked: Vec<usize> = (0..images.len()).collect();
        ranked.sort_by(|&a, &b| {
            images[b]
                .mean_luma()
                .partial_cmp(&images[a].mean_luma())
                .unwrap()
        });

        let mut mask = vec![false; images.len()];
        for &idx in ranked.iter().take(images.len() / 3) {
            mask[idx] = true;
        }
        Ok(Verdict::select(mask))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Simulated Interactive Evolution ===\n");

    let config = EvolveConfig {
        model: ModelConfig {
            latent_dim: 64,
            ..ModelConfig::default()
        },
        evolution: EvolutionConfig {
            n_population: 18,
            n_new: 2,
            p_mutation: 0.5,
            batch_size: 4,
            seed: Some(42),
        },
        ..EvolveConfig::default()
    };

    let decoder = PatternDecoder::new(config.model.latent_dim).with_image_size(8);
    let user = SimulatedUser {
        generations_left: 8,
    };
    let rng = StdRng::seed_from_u64(42);

    let mut evolution = InteractiveEvolution::new(&config, decoder, user, rng)?;
    evolution.run()?;

    println!(
        "\nDone after {} generation transitions.",
        evolution.generation()
    );
    println!(
        "Final population: {} individuals of dimension {}.",
        evolution.population().len(),
        evolution.population().dimension().unwrap_or(0)
    );

    Ok(())
}
