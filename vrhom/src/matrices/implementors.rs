// ======== Default matrix oracles =============================

use std::fmt::Debug;

use crate::{
    fields::{NonZeroCoefficient, Z2},
    VrhomError,
};

use super::MatrixOracle;

// ====== VecVecMatrix =========================

/// A sparse matrix stored as a list of columns.
///
/// Meant for small hand-written matrices, e.g. in tests or when checking a reduction by hand;
/// the homology pipeline itself goes through [`BoundaryMatrix`](super::BoundaryMatrix) and [`DenseZ2Matrix`].
pub struct VecVecMatrix<CF: NonZeroCoefficient> {
    n_rows: usize,
    columns: Vec<Vec<(CF, usize)>>,
}

impl<CF: NonZeroCoefficient> VecVecMatrix<CF> {
    /// Panics if some entry has row index `>= n_rows`.
    pub fn new(n_rows: usize, columns: Vec<Vec<(CF, usize)>>) -> Self {
        assert!(
            columns.iter().flatten().all(|(_cf, row)| *row < n_rows),
            "Row index out of bounds"
        );
        Self { n_rows, columns }
    }
}

impl<CF: NonZeroCoefficient> From<Vec<Vec<(CF, usize)>>> for VecVecMatrix<CF> {
    /// The number of rows is one more than the largest row index that appears.
    fn from(columns: Vec<Vec<(CF, usize)>>) -> Self {
        let n_rows = columns
            .iter()
            .flatten()
            .map(|(_cf, row)| row + 1)
            .max()
            .unwrap_or(0);
        Self { n_rows, columns }
    }
}

impl<CF: NonZeroCoefficient + Debug> Debug for VecVecMatrix<CF> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.columns.fmt(f)
    }
}

impl<CF: NonZeroCoefficient> MatrixOracle for VecVecMatrix<CF> {
    type CoefficientField = CF;

    fn n_rows(&self) -> usize {
        self.n_rows
    }

    fn n_cols(&self) -> usize {
        self.columns.len()
    }

    fn column(
        &self,
        col: usize,
    ) -> Result<impl Iterator<Item = (Self::CoefficientField, usize)>, VrhomError> {
        Ok(self
            .columns
            .get(col)
            .ok_or(VrhomError::NotInDomain)?
            .iter()
            .cloned())
    }
}

/// A [`VecVecMatrix`] over [`Z2`] from lists of the rows holding a `1` in each column.
/// Helper for writing small matrices by hand.
#[allow(non_snake_case)]
pub fn simple_Z2_matrix(cols: Vec<Vec<usize>>) -> VecVecMatrix<Z2> {
    let cols_with_coeffs = cols
        .into_iter()
        .map(|col| col.into_iter().map(|row| (Z2::one(), row)).collect())
        .collect::<Vec<Vec<(Z2, usize)>>>();

    VecVecMatrix::from(cols_with_coeffs)
}

// ====== DenseZ2Matrix ========================

/// A dense 0/1 matrix, stored row by row.
/// A `0` entry is `None`, a `1` entry is `Some(Z2)`.
#[derive(Clone, PartialEq, Eq)]
pub struct DenseZ2Matrix {
    n_cols: usize,
    rows: Vec<Vec<Option<Z2>>>,
}

impl Debug for DenseZ2Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DenseZ2Matrix {}x{} [", self.n_rows(), self.n_cols)?;
        for row in self.rows.iter() {
            let bits: String = row
                .iter()
                .map(|entry| if entry.is_some() { '1' } else { '0' })
                .collect();
            writeln!(f, "  {bits}")?;
        }
        write!(f, "]")
    }
}

impl DenseZ2Matrix {
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_cols,
            rows: vec![vec![None; n_cols]; n_rows],
        }
    }

    /// Panics if the rows do not all have `n_cols` entries.
    pub fn from_bits(n_cols: usize, rows: Vec<Vec<u8>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| {
                assert_eq!(row.len(), n_cols, "Rows should all have n_cols entries");
                row.into_iter().map(Z2::from_bit).collect()
            })
            .collect();
        Self { n_cols, rows }
    }

    /// Writes out every column of `oracle`.
    pub fn from_oracle<M>(oracle: M) -> Result<Self, VrhomError>
    where
        M: MatrixOracle<CoefficientField = Z2>,
    {
        let mut matrix = Self::zeros(oracle.n_rows(), oracle.n_cols());
        for col in 0..oracle.n_cols() {
            for (coeff, row) in oracle.column(col)? {
                if row >= matrix.n_rows() {
                    return Err(VrhomError::NotInDomain);
                }
                Z2::add_into(&mut matrix.rows[row][col], Some(coeff));
            }
        }
        Ok(matrix)
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols)
    }

    pub fn entry(&self, row: usize, col: usize) -> Option<Z2> {
        self.rows[row][col]
    }

    pub fn row(&self, row: usize) -> &[Option<Z2>] {
        &self.rows[row]
    }

    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|entry| Z2::to_bit(*entry)).collect())
            .collect()
    }

    pub fn is_zero_row(&self, row: usize) -> bool {
        self.rows[row].iter().all(Option::is_none)
    }

    pub fn nonzero_rows(&self) -> usize {
        (0..self.n_rows()).filter(|&i| !self.is_zero_row(i)).count()
    }

    /// Row `target` becomes `row(target) + row(source)` mod 2.
    pub fn add_row_into(&mut self, source: usize, target: usize) {
        if source == target {
            self.rows[target].fill(None);
            return;
        }
        let (source_row, target_row) = if source < target {
            let (lo, hi) = self.rows.split_at_mut(target);
            (&lo[source], &mut hi[0])
        } else {
            let (lo, hi) = self.rows.split_at_mut(source);
            (&hi[0], &mut lo[target])
        };
        for (t, s) in target_row.iter_mut().zip(source_row.iter()) {
            Z2::add_into(t, *s);
        }
    }
}

impl MatrixOracle for DenseZ2Matrix {
    type CoefficientField = Z2;

    fn n_rows(&self) -> usize {
        self.rows.len()
    }

    fn n_cols(&self) -> usize {
        self.n_cols
    }

    fn column(
        &self,
        col: usize,
    ) -> Result<impl Iterator<Item = (Self::CoefficientField, usize)>, VrhomError> {
        if col >= self.n_cols {
            return Err(VrhomError::NotInDomain);
        }
        Ok(self
            .rows
            .iter()
            .enumerate()
            .filter_map(move |(row, entries)| entries[col].map(|coeff| (coeff, row))))
    }
}
