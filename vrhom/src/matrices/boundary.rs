//! The mod-2 boundary map between two consecutive dimensions of a complex.

use crate::{fields::Z2, simplex::Simplex, VrhomError};

use super::{DenseZ2Matrix, MatrixOracle};

/// Rows are indexed by `lower` (the `(k-1)`-simplices), columns by `higher` (the `k`-simplices).
/// Entry `(i, j)` is `1` iff `lower[i]` is a face of `higher[j]`.
pub struct BoundaryMatrix<'a> {
    higher: &'a [&'a Simplex],
    lower: &'a [&'a Simplex],
}

impl<'a> BoundaryMatrix<'a> {
    pub fn new(higher: &'a [&'a Simplex], lower: &'a [&'a Simplex]) -> Self {
        Self { higher, lower }
    }
}

impl<'a> MatrixOracle for BoundaryMatrix<'a> {
    type CoefficientField = Z2;

    fn n_rows(&self) -> usize {
        self.lower.len()
    }

    fn n_cols(&self) -> usize {
        self.higher.len()
    }

    fn column(
        &self,
        col: usize,
    ) -> Result<impl Iterator<Item = (Self::CoefficientField, usize)>, VrhomError> {
        let higher = *self.higher.get(col).ok_or(VrhomError::NotInDomain)?;
        Ok(self
            .lower
            .iter()
            .enumerate()
            .filter(move |(_i, lower)| lower.is_subset_of(higher))
            .map(|(i, _lower)| (Z2, i)))
    }
}

/// Writes out the boundary map from `higher` to `lower` as a dense matrix.
/// If either list is empty the corresponding axis has length zero.
pub fn boundary_matrix(
    higher: &[&Simplex],
    lower: &[&Simplex],
) -> Result<DenseZ2Matrix, VrhomError> {
    DenseZ2Matrix::from_oracle(BoundaryMatrix::new(higher, lower))
}
