//! Row reduction of 0/1 matrices over [`Z2`](crate::fields::Z2).
//!
//! Columns are processed left to right.
//! For each column the first row with a `1` there that is not yet *stable* becomes the pivot row for that column,
//! is marked stable, and is added into every other non-stable row with a `1` in that column.
//! Stable rows are only ever used as sources, so each row is fixed at most once and the reduction terminates after one pass.
//!
//! In the result the pivot rows are linearly independent and every other row is zero,
//! so the rank is the number of non-zero rows.

use log::trace;
use rustc_hash::FxHashSet;

use crate::matrices::{DenseZ2Matrix, MatrixOracle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pivot {
    pub row: usize,
    pub col: usize,
}

/// The output of [`mod2_row_reduction`].
#[derive(Debug, Clone)]
pub struct RowReduction {
    reduced: DenseZ2Matrix,
    /// In the order they were found, i.e. ascending in `col`.
    pivots: Vec<Pivot>,
}

impl RowReduction {
    /// The reduced matrix, which has the same shape as the input.
    pub fn reduced(&self) -> &DenseZ2Matrix {
        &self.reduced
    }

    pub fn into_reduced(self) -> DenseZ2Matrix {
        self.reduced
    }

    pub fn pivots(&self) -> &[Pivot] {
        &self.pivots
    }

    /// Dimension of the image over `Z2`.
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Dimension of the kernel over `Z2`, by rank-nullity.
    pub fn kernel_dimension(&self) -> usize {
        self.reduced.n_cols() - self.rank()
    }
}

pub fn mod2_row_reduction(matrix: &DenseZ2Matrix) -> RowReduction {
    let (n_rows, n_cols) = matrix.shape();
    let mut reduced = matrix.clone();
    let mut stable_rows: FxHashSet<usize> = FxHashSet::default();
    let mut pivots = vec![];

    for col in 0..n_cols {
        let Some(pivot_row) = (0..n_rows)
            .find(|row| reduced.entry(*row, col).is_some() && !stable_rows.contains(row))
        else {
            // No leading 1 in this column
            continue;
        };
        stable_rows.insert(pivot_row);
        pivots.push(Pivot {
            row: pivot_row,
            col,
        });

        for row in 0..n_rows {
            if row != pivot_row
                && !stable_rows.contains(&row)
                && reduced.entry(row, col).is_some()
            {
                reduced.add_row_into(pivot_row, row);
            }
        }
    }

    trace!(
        "Reduced {}x{} matrix, found {} pivots",
        n_rows,
        n_cols,
        pivots.len()
    );

    RowReduction { reduced, pivots }
}

/// Rank over `Z2`; a matrix with a zero-length axis has rank `0` and is not reduced.
pub fn mod2_rank(matrix: &DenseZ2Matrix) -> usize {
    if matrix.is_degenerate() {
        return 0;
    }
    let reduction = mod2_row_reduction(matrix);
    let rank = reduction.reduced().nonzero_rows();
    debug_assert_eq!(rank, reduction.rank());
    rank
}

#[cfg(test)]
mod tests {
    use crate::matrices::{simple_Z2_matrix, DenseZ2Matrix};

    use super::{mod2_rank, mod2_row_reduction, Pivot};

    fn triangle_boundary() -> DenseZ2Matrix {
        // Columns are the edges 01, 02, 12 of a triangle
        DenseZ2Matrix::from_oracle(simple_Z2_matrix(vec![vec![0, 1], vec![0, 2], vec![1, 2]]))
            .unwrap()
    }

    #[test]
    fn test_triangle_reduction() {
        let reduction = mod2_row_reduction(&triangle_boundary());
        assert_eq!(
            reduction.pivots(),
            &[Pivot { row: 0, col: 0 }, Pivot { row: 1, col: 1 }]
        );
        assert_eq!(
            reduction.reduced().to_bits(),
            vec![vec![1, 1, 0], vec![0, 1, 1], vec![0, 0, 0]]
        );
        assert_eq!(reduction.rank(), 2);
        assert_eq!(reduction.kernel_dimension(), 1);
    }

    #[test]
    fn test_stable_rows_are_only_sources() {
        let matrix = DenseZ2Matrix::from_bits(3, vec![vec![1, 1, 0], vec![0, 1, 1], vec![1, 0, 1]]);
        let reduction = mod2_row_reduction(&matrix);
        // Row 0 keeps its 1 in column 1 even though row 1 is the pivot there
        assert_eq!(
            reduction.reduced().to_bits(),
            vec![vec![1, 1, 0], vec![0, 1, 1], vec![0, 0, 0]]
        );
        assert_eq!(mod2_rank(&matrix), 2);
    }

    #[test]
    fn test_rank_is_mod_2() {
        let matrix = DenseZ2Matrix::from_bits(
            3,
            vec![vec![1, 1, 0], vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 1]],
        );
        assert_eq!(mod2_rank(&matrix), 3);
        // Rank 3 over the reals but the rows sum to zero mod 2
        let matrix = DenseZ2Matrix::from_bits(3, vec![vec![1, 1, 0], vec![0, 1, 1], vec![1, 0, 1]]);
        assert_eq!(mod2_rank(&matrix), 2);
    }

    #[test]
    fn test_identity_and_zero() {
        let identity = DenseZ2Matrix::from_bits(3, vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);
        assert_eq!(mod2_rank(&identity), 3);
        assert_eq!(mod2_row_reduction(&identity).reduced(), &identity);

        let zero = DenseZ2Matrix::zeros(4, 2);
        let reduction = mod2_row_reduction(&zero);
        assert_eq!(reduction.rank(), 0);
        assert_eq!(reduction.kernel_dimension(), 2);
    }

    #[test]
    fn test_reduction_is_idempotent() {
        let matrices = vec![
            triangle_boundary(),
            DenseZ2Matrix::from_bits(
                4,
                vec![
                    vec![0, 1, 1, 0],
                    vec![1, 1, 0, 1],
                    vec![1, 0, 1, 1],
                    vec![0, 0, 1, 1],
                    vec![1, 1, 1, 1],
                ],
            ),
            DenseZ2Matrix::from_bits(2, vec![vec![1, 1], vec![1, 1], vec![0, 1]]),
        ];
        for matrix in matrices {
            let once = mod2_row_reduction(&matrix).into_reduced();
            let twice = mod2_row_reduction(&once).into_reduced();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_rank_nullity() {
        let matrix = DenseZ2Matrix::from_bits(
            5,
            vec![
                vec![1, 0, 1, 0, 1],
                vec![0, 1, 1, 0, 0],
                vec![1, 1, 0, 0, 1],
            ],
        );
        let reduction = mod2_row_reduction(&matrix);
        assert_eq!(reduction.rank(), 2);
        assert_eq!(reduction.rank() + reduction.kernel_dimension(), matrix.n_cols());
    }

    #[test]
    fn test_degenerate_shapes() {
        let no_rows = DenseZ2Matrix::zeros(0, 3);
        let no_cols = DenseZ2Matrix::zeros(3, 0);
        assert_eq!(mod2_rank(&no_rows), 0);
        assert_eq!(mod2_rank(&no_cols), 0);
        // Shape is preserved even when there is nothing to do
        assert_eq!(mod2_row_reduction(&no_cols).reduced().shape(), (3, 0));
    }
}
