//! Synthetic point clouds for trying out the pipeline.

use std::f64::consts::TAU;

use rand::Rng;

/// `n_points` evenly spaced points on the unit circle, each coordinate perturbed uniformly in `[-noise, noise]`.
pub fn noisy_circle<R: Rng + ?Sized>(n_points: usize, noise: f64, rng: &mut R) -> Vec<Vec<f64>> {
    let noise = noise.abs();
    (0..n_points)
        .map(|i| {
            let theta = TAU * (i as f64) / (n_points as f64);
            vec![
                theta.cos() + jitter(noise, rng),
                theta.sin() + jitter(noise, rng),
            ]
        })
        .collect()
}

fn jitter<R: Rng + ?Sized>(noise: f64, rng: &mut R) -> f64 {
    if noise > 0.0 {
        rng.gen_range(-noise..=noise)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::persistence::persistent_homology_euclidean;

    use super::noisy_circle;

    #[test]
    fn test_points_stay_near_circle() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = noisy_circle(20, 0.05, &mut rng);
        assert_eq!(points.len(), 20);
        for point in &points {
            let radius = (point[0] * point[0] + point[1] * point[1]).sqrt();
            assert!((radius - 1.0).abs() <= 0.05 * 2.0_f64.sqrt() + 1e-12);
        }
    }

    #[test]
    fn test_seeded_samples_repeat() {
        let a = noisy_circle(8, 0.1, &mut StdRng::seed_from_u64(3));
        let b = noisy_circle(8, 0.1, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_noiseless_square_has_a_loop() {
        let mut rng = StdRng::seed_from_u64(0);
        let points = noisy_circle(4, 0.0, &mut rng);
        let result = persistent_homology_euclidean(&points, Some(1), None).unwrap();
        let dimensions: Vec<usize> = result.pairs().into_iter().map(|(_, dim)| dim).collect();
        assert_eq!(dimensions, vec![0, 1, 0]);
    }
}
