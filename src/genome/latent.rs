//! Latent vector genome
//!
//! A fixed-length real-valued vector in the generative model's latent space.
//! Latents have no identity or lifecycle of their own; they exist only as
//! population members and are replaced wholesale each generation.

use serde::{Deserialize, Serialize};

/// Fixed-length real-valued latent vector
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Latent {
    coords: Vec<f64>,
}

impl Latent {
    /// Create a new latent vector with the given coordinates
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Create a zero-filled latent vector of the given dimension
    pub fn zeros(dimension: usize) -> Self {
        Self {
            coords: vec![0.0; dimension],
        }
    }

    /// Number of coordinates
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Get a reference to the coordinates
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Take the underlying vector out of this latent
    pub fn into_inner(self) -> Vec<f64> {
        self.coords
    }
}

impl std::ops::Index<usize> for Latent {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

impl std::ops::IndexMut<usize> for Latent {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.coords[index]
    }
}

impl From<Vec<f64>> for Latent {
    fn from(coords: Vec<f64>) -> Self {
        Self { coords }
    }
}

impl From<Latent> for Vec<f64> {
    fn from(latent: Latent) -> Self {
        latent.coords
    }
}

impl<'a> IntoIterator for &'a Latent {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latent_new() {
        let v = Latent::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.dimension(), 3);
        assert_eq!(v.coords(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_latent_zeros() {
        let v = Latent::zeros(5);
        assert_eq!(v.dimension(), 5);
        assert!(v.coords().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_latent_indexing() {
        let mut v = Latent::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);

        v[1] = 42.0;
        assert_eq!(v[1], 42.0);
    }

    #[test]
    fn test_latent_into_inner() {
        let v = Latent::new(vec![1.0, 2.0]);
        assert_eq!(v.into_inner(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_latent_iteration() {
        let v = Latent::new(vec![1.0, 2.0, 3.0]);
        let sum: f64 = (&v).into_iter().sum();
        assert_eq!(sum, 6.0);
    }

    #[test]
    fn test_latent_serialization() {
        let v = Latent::new(vec![1.0, 2.0, 3.0]);
        let serialized = serde_json::to_string(&v).unwrap();
        let deserialized: Latent = serde_json::from_str(&serialized).unwrap();
        assert_eq!(v, deserialized);
    }
}
