//! Illustrative pseudo-embedding vectors
//!
//! The visualizer paints each token next to a small heatmap of random
//! values. These vectors carry no semantic meaning whatsoever; they exist
//! only to give the animation texture. Nothing ever computes with them.

use rand::Rng;

/// Default vector length, rendered as a 5x5 heatmap.
pub const DEFAULT_VECTOR_LEN: usize = 25;

/// Generate `len` independent uniform values in `[0, 1)`.
pub fn generate_vector(len: usize) -> Vec<f64> {
    generate_vector_with(&mut rand::rng(), len)
}

/// Seedable variant of [`generate_vector`] for deterministic tests.
pub fn generate_vector_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random_range(0.0..1.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_length() {
        assert_eq!(generate_vector(DEFAULT_VECTOR_LEN).len(), 25);
        assert_eq!(generate_vector(7).len(), 7);
    }

    #[test]
    fn test_zero_length() {
        assert!(generate_vector(0).is_empty());
    }

    #[test]
    fn test_values_in_unit_interval() {
        for value in generate_vector(100) {
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_vector_with(&mut StdRng::seed_from_u64(42), 25);
        let b = generate_vector_with(&mut StdRng::seed_from_u64(42), 25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_seeds_differ() {
        let a = generate_vector_with(&mut StdRng::seed_from_u64(1), 25);
        let b = generate_vector_with(&mut StdRng::seed_from_u64(2), 25);
        assert_ne!(a, b);
    }
}
