//! Mod-2 simplicial homology for small, explicitly stored complexes.
//!
//! A [`SimplicialComplex`](simplex::SimplicialComplex) is split by dimension, the boundary maps between
//! neighbouring dimensions are written out as dense 0/1 matrices and their ranks are read off after a
//! row reduction over [`Z2`](fields::Z2).
//! The dimension of the `k`-th homology group is then `dim ker(d_k) - rank(d_{k+1})`.

pub mod fields;
pub mod homology;
pub mod matrices;
pub mod reduction;
pub mod simplex;

pub use homology::{betti_numbers, homology_dimension};
pub use simplex::{Simplex, SimplicialComplex};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VrhomError {
    /// Requested a column that the matrix does not have.
    #[error("column is not in the domain of the matrix")]
    NotInDomain,
    /// `dim ker(d_k) < rank(d_{k+1})`, which can only happen if the complex is not downward-closed.
    #[error("inconsistent ranks in dimension {dimension}: dim ker = {kernel} < dim img = {image}")]
    InconsistentRank {
        dimension: usize,
        kernel: usize,
        image: usize,
    },
    /// The distance function returned NaN for this pair of points.
    #[error("distance between points {row} and {col} is NaN")]
    NanDistance { row: usize, col: usize },
    /// The requested filtration scale was NaN.
    #[error("filtration scale is NaN")]
    NanScale,
    /// Row `row` of a supposedly square matrix has `len` entries, expected `expected`.
    #[error("row {row} of distance matrix has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// Point `point` has `len` coordinates but the first point has `expected`.
    #[error("point {point} has {len} coordinates, expected {expected}")]
    CoordinateMismatch {
        point: usize,
        len: usize,
        expected: usize,
    },
}
