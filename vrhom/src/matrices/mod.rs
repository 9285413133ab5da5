use itertools::equal;

use crate::{fields::NonZeroCoefficient, VrhomError};

pub mod boundary;
pub mod implementors;

pub use boundary::{boundary_matrix, BoundaryMatrix};
pub use implementors::{simple_Z2_matrix, DenseZ2Matrix, VecVecMatrix};

// ======== Abstract matrix oracle trait =======================

/// A matrix with rows `0..n_rows()` and columns `0..n_cols()`, which can produce its columns on demand.
pub trait MatrixOracle {
    type CoefficientField: NonZeroCoefficient;

    fn n_rows(&self) -> usize;
    fn n_cols(&self) -> usize;

    /// Non-zero entries of column `col` as `(coefficient, row_index)`, in any order and without repeats.
    /// If `col >= n_cols()` please return [`VrhomError::NotInDomain`].
    fn column(
        &self,
        col: usize,
    ) -> Result<impl Iterator<Item = (Self::CoefficientField, usize)>, VrhomError>;

    /// True if either axis has length zero.
    fn is_degenerate(&self) -> bool {
        self.n_rows() == 0 || self.n_cols() == 0
    }

    /// Checks that the matrices agree on column `col`, ignoring the order entries are produced in
    fn eq_on_col<M2>(&self, other: &M2, col: usize) -> bool
    where
        Self: Sized,
        M2: MatrixOracle<CoefficientField = Self::CoefficientField>,
    {
        let (Ok(self_col), Ok(other_col)) = (self.column(col), other.column(col)) else {
            return false;
        };
        let mut self_col: Vec<_> = self_col.map(|(_coeff, row)| row).collect();
        let mut other_col: Vec<_> = other_col.map(|(_coeff, row)| row).collect();
        self_col.sort_unstable();
        other_col.sort_unstable();
        equal(self_col, other_col)
    }
}

impl<'a, M> MatrixOracle for &'a M
where
    M: MatrixOracle,
{
    type CoefficientField = M::CoefficientField;

    fn n_rows(&self) -> usize {
        (*self).n_rows()
    }

    fn n_cols(&self) -> usize {
        (*self).n_cols()
    }

    fn column(
        &self,
        col: usize,
    ) -> Result<impl Iterator<Item = (Self::CoefficientField, usize)>, VrhomError> {
        (*self).column(col)
    }
}
