//! The Vietoris-Rips filtration over every distinct distance of a point set.

use log::debug;
use ordered_float::NotNan;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use vrhom::{homology_dimension, SimplicialComplex, VrhomError};

use crate::{
    complex::build_complex,
    default_max_dim,
    distance::{build_distance_matrix, DistanceMatrix},
};

/// One complex per distinct finite distance `r_0 < r_1 < ... < r_m`.
///
/// Each complex comes from the greedy walk in [`build_complex`], so a complex is not always
/// a subcomplex of the one at the next scale: a larger `r` can steer a walk onto a different chain.
/// Use [`PersistentVectorSpace::is_monotone`] to check a given filtration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistentVectorSpace {
    scales: Vec<NotNan<f64>>,
    complexes: Vec<SimplicialComplex>,
}

impl PersistentVectorSpace {
    /// `max_dim = None` explores simplices up to dimension `n_points - 1`.
    pub fn from_distances(distances: &DistanceMatrix, max_dim: Option<usize>) -> Self {
        let max_dim = max_dim.unwrap_or_else(|| default_max_dim(distances.n_points()));
        let scales = distances.distinct_scales();
        debug!(
            "Building {} complexes on {} points, max_dim={max_dim}",
            scales.len(),
            distances.n_points()
        );

        #[cfg(feature = "parallel")]
        let complexes = scales
            .par_iter()
            .map(|r| build_complex(distances, *r, max_dim))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let complexes = scales
            .iter()
            .map(|r| build_complex(distances, *r, max_dim))
            .collect();

        Self { scales, complexes }
    }

    pub fn scales(&self) -> &[NotNan<f64>] {
        &self.scales
    }

    pub fn complexes(&self) -> &[SimplicialComplex] {
        &self.complexes
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NotNan<f64>, &SimplicialComplex)> {
        self.scales.iter().copied().zip(self.complexes.iter())
    }

    /// The complex at exactly `scale`, if `scale` is one of the filtration values.
    pub fn complex_at(&self, scale: NotNan<f64>) -> Option<&SimplicialComplex> {
        let idx = self.scales.binary_search(&scale).ok()?;
        Some(&self.complexes[idx])
    }

    /// Checks that each complex is contained in the next.
    pub fn is_monotone(&self) -> bool {
        self.complexes
            .windows(2)
            .all(|pair| pair[0].is_subcomplex_of(&pair[1]))
    }

    /// `dim H_k` of each complex, in ascending order of scale.
    pub fn homology_dimensions(&self, k: usize) -> Result<Vec<usize>, VrhomError> {
        self.complexes
            .iter()
            .map(|complex| homology_dimension(complex, k))
            .collect()
    }
}

/// Builds the distance matrix of `points` and then one complex per distinct distance.
pub fn build_filtration<P, D>(
    points: &[P],
    distance: D,
    max_dim: Option<usize>,
) -> Result<PersistentVectorSpace, VrhomError>
where
    D: Fn(&P, &P) -> f64,
{
    let distances = build_distance_matrix(points, distance)?;
    Ok(PersistentVectorSpace::from_distances(&distances, max_dim))
}
