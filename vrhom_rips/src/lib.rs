//! Vietoris-Rips complexes of finite metric spaces and their mod-2 homology across all scales.
//!
//! The pipeline is
//! points -> [`DistanceMatrix`] -> [`build_complex`] at one scale, or [`PersistentVectorSpace`] over every scale,
//! -> [`vrhom::homology_dimension`].
//! [`persistent_homology_at_k`] runs the whole thing in one call.

pub mod complex;
pub mod distance;
pub mod filtration;
pub mod persistence;
pub mod sample;

pub use complex::{build_complex, find_big_simplices};
pub use distance::{build_distance_matrix, euclidean, euclidean_distance_matrix, DistanceMatrix};
pub use filtration::{build_filtration, PersistentVectorSpace};
pub use persistence::{
    persistent_homology_at_k, persistent_homology_euclidean, persistent_homology_from_distances,
    PersistentHomology,
};

/// The largest simplex dimension explored when none is requested, `n_points - 1`.
pub fn default_max_dim(n_points: usize) -> usize {
    n_points.saturating_sub(1)
}
