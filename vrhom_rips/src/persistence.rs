//! One-call entry points: from points (or distances) to homology dimensions.

use log::info;
use ordered_float::NotNan;
use serde::Serialize;
use vrhom::{homology_dimension, VrhomError};

use crate::{
    complex::build_complex,
    default_max_dim,
    distance::{build_distance_matrix, euclidean_distance_matrix, DistanceMatrix},
    filtration::PersistentVectorSpace,
};

/// The dimension of `H_k` either at one scale or at every scale of the filtration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PersistentHomology {
    AtScale {
        homology_dim: usize,
        scale: f64,
        dimension: usize,
    },
    AcrossScales {
        homology_dim: usize,
        scales: Vec<f64>,
        dimensions: Vec<usize>,
    },
}

impl PersistentHomology {
    pub fn homology_dim(&self) -> usize {
        match self {
            PersistentHomology::AtScale { homology_dim, .. }
            | PersistentHomology::AcrossScales { homology_dim, .. } => *homology_dim,
        }
    }

    /// `(scale, dimension)` pairs in ascending order of scale.
    pub fn pairs(&self) -> Vec<(f64, usize)> {
        match self {
            PersistentHomology::AtScale {
                scale, dimension, ..
            } => vec![(*scale, *dimension)],
            PersistentHomology::AcrossScales {
                scales, dimensions, ..
            } => scales.iter().copied().zip(dimensions.iter().copied()).collect(),
        }
    }
}

/// `dim H_k` of the Rips complexes of `distances`.
///
/// With `r = Some(_)` only the complex at `r` is built, otherwise one complex per distinct distance.
/// `k = None` means `n_points - 1`, and so does `max_dim = None` for the largest simplex dimension explored.
pub fn persistent_homology_from_distances(
    distances: &DistanceMatrix,
    k: Option<usize>,
    r: Option<f64>,
    max_dim: Option<usize>,
) -> Result<PersistentHomology, VrhomError> {
    let n_points = distances.n_points();
    let homology_dim = k.unwrap_or_else(|| default_max_dim(n_points));

    match r {
        Some(r) => {
            let scale = NotNan::new(r).map_err(|_| VrhomError::NanScale)?;
            let max_dim = max_dim.unwrap_or_else(|| default_max_dim(n_points));
            let complex = build_complex(distances, scale, max_dim);
            let dimension = homology_dimension(&complex, homology_dim)?;
            info!("dim H_{homology_dim} at r={r} is {dimension}");
            Ok(PersistentHomology::AtScale {
                homology_dim,
                scale: r,
                dimension,
            })
        }
        None => {
            let filtration = PersistentVectorSpace::from_distances(distances, max_dim);
            let dimensions = filtration.homology_dimensions(homology_dim)?;
            info!(
                "Computed dim H_{homology_dim} at {} scales",
                filtration.len()
            );
            Ok(PersistentHomology::AcrossScales {
                homology_dim,
                scales: filtration.scales().iter().map(|r| r.into_inner()).collect(),
                dimensions,
            })
        }
    }
}

/// `dim H_k` of the Rips complexes of `points` under `distance`, see [`persistent_homology_from_distances`].
pub fn persistent_homology_at_k<P, D>(
    points: &[P],
    k: Option<usize>,
    r: Option<f64>,
    distance: D,
) -> Result<PersistentHomology, VrhomError>
where
    D: Fn(&P, &P) -> f64,
{
    let distances = build_distance_matrix(points, distance)?;
    persistent_homology_from_distances(&distances, k, r, None)
}

/// [`persistent_homology_at_k`] with the Euclidean distance.
/// Every point must have as many coordinates as the first.
pub fn persistent_homology_euclidean<P>(
    points: &[P],
    k: Option<usize>,
    r: Option<f64>,
) -> Result<PersistentHomology, VrhomError>
where
    P: AsRef<[f64]>,
{
    let distances = euclidean_distance_matrix(points)?;
    persistent_homology_from_distances(&distances, k, r, None)
}
