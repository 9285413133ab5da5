use std::collections::BTreeSet;

use ordered_float::NotNan;
use vrhom::VrhomError;

/// Distances are rounded to this many decimal digits, so that equal distances compare equal
/// and the set of filtration scales is not fragmented by floating point noise.
pub const DISTANCE_DECIMALS: i32 = 7;

/// Rounds the exact binary value of `distance` to [`DISTANCE_DECIMALS`] digits (ties to even)
/// and returns the nearest `f64` to that decimal.
/// Infinities and NaN pass through unchanged.
pub fn round_distance(distance: f64) -> f64 {
    if !distance.is_finite() {
        return distance;
    }
    let decimal = format!("{distance:.prec$}", prec = DISTANCE_DECIMALS as usize);
    decimal.parse().unwrap_or(distance)
}

pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Pairwise distances between `n` points, each rounded to [`DISTANCE_DECIMALS`] digits.
///
/// Symmetry, non-negativity and a zero diagonal are up to the distance function and are not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix(Vec<Vec<NotNan<f64>>>);

impl DistanceMatrix {
    /// Takes a precomputed matrix, rounding every entry.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, VrhomError> {
        let expected = rows.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != expected {
                    return Err(VrhomError::NotSquare {
                        row: i,
                        len: row.len(),
                        expected,
                    });
                }
                row.into_iter()
                    .enumerate()
                    .map(|(j, entry)| rounded(entry, i, j))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(rows))
    }

    pub fn n_points(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, i: usize, j: usize) -> NotNan<f64> {
        self.0[i][j]
    }

    pub fn rows(&self) -> &[Vec<NotNan<f64>>] {
        &self.0
    }

    /// Every finite entry of the matrix, once, in ascending order.
    /// This includes `0` from the diagonal whenever there is at least one point.
    pub fn distinct_scales(&self) -> Vec<NotNan<f64>> {
        self.0
            .iter()
            .flatten()
            .copied()
            .filter(|d| d.is_finite())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn rounded(distance: f64, row: usize, col: usize) -> Result<NotNan<f64>, VrhomError> {
    NotNan::new(round_distance(distance)).map_err(|_| VrhomError::NanDistance { row, col })
}

/// Euclidean distances between coordinate rows, which must all have the length of the first row.
pub fn euclidean_distance_matrix<P>(points: &[P]) -> Result<DistanceMatrix, VrhomError>
where
    P: AsRef<[f64]>,
{
    if let Some(first) = points.first() {
        let expected = first.as_ref().len();
        if let Some((point, row)) = points
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != expected)
        {
            return Err(VrhomError::CoordinateMismatch {
                point,
                len: row.as_ref().len(),
                expected,
            });
        }
    }
    build_distance_matrix(points, |a, b| euclidean(a.as_ref(), b.as_ref()))
}

/// Evaluates `distance` on every ordered pair of points, diagonal included.
pub fn build_distance_matrix<P, D>(points: &[P], distance: D) -> Result<DistanceMatrix, VrhomError>
where
    D: Fn(&P, &P) -> f64,
{
    let rows = points
        .iter()
        .enumerate()
        .map(|(i, x_i)| {
            points
                .iter()
                .enumerate()
                .map(|(j, x_j)| rounded(distance(x_i, x_j), i, j))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DistanceMatrix(rows))
}
