//! Model collaborator seam
//!
//! The generative model is an external black box behind [`LatentDecoder`]:
//! one image per latent, input order preserved, inference only. The crate
//! ships [`PatternDecoder`], a deterministic procedural stand-in, so the full
//! loop (and the test suite) runs without a model backend.

use crate::error::{EvoResult, EvolveError};
use crate::population::Population;

/// One rendered RGB8 image, row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Image {
    /// Create an image from raw RGB8 pixel data
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        assert_eq!(pixels.len(), width * height * 3, "RGB8 buffer size");
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGB8 pixel data, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGB triple at (x, y)
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Mean luminance in [0, 1]
    pub fn mean_luma(&self) -> f64 {
        if self.pixels.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.pixels.iter().map(|&p| p as u64).sum();
        sum as f64 / (self.pixels.len() as f64 * 255.0)
    }
}

/// A batch of rendered images, index-aligned with the input latents
pub type ImageBatch = Vec<Image>;

/// The model collaborator: maps latent batches to image batches
///
/// Implementations must return exactly one image per input latent, in input
/// order, and be deterministic given the same weights and inputs. The latent
/// dimensionality is a property of the model, queried once at startup.
pub trait LatentDecoder {
    /// Latent dimensionality this model consumes
    fn latent_dimension(&self) -> usize;

    /// Render one image per latent, preserving input order
    fn render(&self, batch: &Population) -> EvoResult<ImageBatch>;
}

/// Deterministic procedural decoder
///
/// Tiles each latent's coordinates across a small RGB image, mapping values
/// the way a generator's unnormalized output is mapped for display: clamp to
/// [-1, 1], then scale to 0..=255. A stand-in for a real generative backend,
/// good enough to drive the loop visually and to test against.
#[derive(Clone, Debug)]
pub struct PatternDecoder {
    dimension: usize,
    image_size: usize,
}

impl PatternDecoder {
    /// Create a decoder for the given latent dimensionality
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            image_size: 16,
        }
    }

    /// Set the square image edge length
    pub fn with_image_size(mut self, image_size: usize) -> Self {
        assert!(image_size > 0, "Image size must be positive");
        self.image_size = image_size;
        self
    }

    fn to_rgb8(value: f64) -> u8 {
        ((value.clamp(-1.0, 1.0) + 1.0) / 2.0 * 255.0).round() as u8
    }
}

impl LatentDecoder for PatternDecoder {
    fn latent_dimension(&self) -> usize {
        self.dimension
    }

    fn render(&self, batch: &Population) -> EvoResult<ImageBatch> {
        let size = self.image_size;
        batch
            .iter()
            .map(|latent| {
                if latent.dimension() != self.dimension {
                    return Err(EvolveError::Model(format!(
                        "expected latent dimension {}, got {}",
                        self.dimension,
                        latent.dimension()
                    )));
                }
                let pixels = (0..size * size * 3)
                    .map(|i| Self::to_rgb8(latent[i % self.dimension]))
                    .collect();
                Ok(Image::new(size, size, pixels))
            })
            .collect()
    }
}
