//! Construction of the Vietoris-Rips complex at a single scale.
//!
//! For each vertex we greedily grow simplices through it (see [`find_big_simplices`])
//! and then close the result downwards by adding every face.
//!
//! The greedy walk follows a single chain per starting neighbour, scanning candidates in ascending index order
//! from the current frontier and taking the first admissible one.
//! It does not enumerate every maximal clique, so the result can be smaller than the textbook
//! Vietoris-Rips complex, which contains every vertex set that is pairwise within `r`.
//! The walk is kept as is so that outputs stay reproducible.

use log::{debug, trace};
use ordered_float::NotNan;
use rustc_hash::FxHashSet;
use vrhom::{Simplex, SimplicialComplex};

use crate::distance::DistanceMatrix;

/// The simplices found by growing greedily from `vertex`, at most `max_dim + 1` vertices each.
///
/// For every `col` with `d(vertex, col) <= r` (`col == vertex` included) a walk starts with the simplex `{vertex, col}`
/// and frontier `col`.
/// The walk scans `j = frontier, frontier + 1, ...` for the first `j` not yet in the simplex
/// that is within `r` of every vertex of the simplex; `j` is admitted and becomes the new frontier.
/// The walk ends when no `j` is admissible or the simplex has `max_dim + 1` vertices.
pub fn find_big_simplices(
    distances: &DistanceMatrix,
    r: NotNan<f64>,
    vertex: usize,
    max_dim: usize,
) -> FxHashSet<Simplex> {
    let n_points = distances.n_points();
    let max_vertices = max_dim.saturating_add(1);
    let within = |a: usize, b: usize| distances.get(a, b) <= r;

    let mut simplices = FxHashSet::default();
    for col in 0..n_points {
        if !within(vertex, col) {
            continue;
        }
        let mut simplex = vec![vertex];
        if col != vertex && simplex.len() < max_vertices {
            simplex.push(col);
        }
        let mut frontier = col;

        while simplex.len() < max_vertices {
            let next = (frontier..n_points).find(|&j| {
                within(frontier, j)
                    && !simplex.contains(&j)
                    && simplex.iter().all(|&w| within(j, w))
            });
            let Some(next) = next else {
                break;
            };
            simplex.push(next);
            frontier = next;
        }

        trace!("Walk from {vertex} via {col} at r={r} found {simplex:?}");
        simplices.extend(Simplex::from_vertices(simplex));
    }
    simplices
}

/// The (greedy) Vietoris-Rips complex at scale `r`, with simplices of dimension at most `max_dim`.
///
/// The result is downward-closed.
/// If `r` is below every distance, including the zero diagonal, the complex is empty.
pub fn build_complex(distances: &DistanceMatrix, r: NotNan<f64>, max_dim: usize) -> SimplicialComplex {
    let n_points = distances.n_points();
    let mut complex = SimplicialComplex::new();

    for vertex in 0..n_points {
        for simplex in find_big_simplices(distances, r, vertex, max_dim) {
            if simplex.n_vertices() == n_points {
                // Every vertex set is a face of this simplex
                debug!("Complex at r={r} is the full simplex on {n_points} vertices");
                return SimplicialComplex::full(n_points);
            }
            complex.insert_with_faces(&simplex);
        }
    }

    debug!(
        "Complex at r={r} has {} simplices, f-vector {:?}",
        complex.len(),
        complex.f_vector()
    );
    complex
}

#[cfg(test)]
mod tests {
    use ordered_float::NotNan;
    use vrhom::{Simplex, SimplicialComplex};

    use crate::distance::{build_distance_matrix, euclidean, DistanceMatrix};

    use super::{build_complex, find_big_simplices};

    fn scale(r: f64) -> NotNan<f64> {
        NotNan::new(r).unwrap()
    }

    fn simplex(vertices: &[usize]) -> Simplex {
        Simplex::from_vertices(vertices.iter().copied()).unwrap()
    }

    fn triangle() -> DistanceMatrix {
        let points = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.5, 3.0_f64.sqrt() / 2.0],
        ];
        build_distance_matrix(&points, |a, b| euclidean(a, b)).unwrap()
    }

    fn square() -> DistanceMatrix {
        let points = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
        ];
        build_distance_matrix(&points, |a, b| euclidean(a, b)).unwrap()
    }

    #[test]
    fn test_triangle_at_edge_length() {
        let complex = build_complex(&triangle(), scale(1.0), 2);
        assert_eq!(complex, SimplicialComplex::full(3));
        assert_eq!(complex.f_vector(), vec![3, 3, 1]);
    }

    #[test]
    fn test_below_every_edge() {
        let complex = build_complex(&triangle(), scale(0.0), 2);
        let vertices: SimplicialComplex = (0..3).map(Simplex::vertex).collect();
        assert_eq!(complex, vertices);
    }

    #[test]
    fn test_negative_scale_is_empty() {
        assert!(build_complex(&triangle(), scale(-1.0), 2).is_empty());
    }

    #[test]
    fn test_square_walks() {
        let distances = square();
        let from_zero = find_big_simplices(&distances, scale(1.0), 0, 3);
        let expected = [simplex(&[0, 1]), simplex(&[0, 3])].into_iter().collect();
        assert_eq!(from_zero, expected);

        let from_three = find_big_simplices(&distances, scale(1.0), 3, 3);
        let expected = [simplex(&[0, 3]), simplex(&[2, 3]), simplex(&[3])]
            .into_iter()
            .collect();
        assert_eq!(from_three, expected);
    }

    #[test]
    fn test_square_cycle_complex() {
        let complex = build_complex(&square(), scale(1.0), 3);
        assert_eq!(complex.f_vector(), vec![4, 4]);
        assert!(complex.contains(&simplex(&[0, 3])));
        assert!(!complex.contains(&simplex(&[0, 2])));
    }

    #[test]
    fn test_square_at_diagonal_is_full() {
        let distances = square();
        let diagonal = distances.get(0, 2);
        let complex = build_complex(&distances, diagonal, 3);
        assert_eq!(complex, SimplicialComplex::full(4));
    }

    #[test]
    fn test_max_dim_caps_simplices() {
        let distances = square();
        let diagonal = distances.get(0, 2);

        let edges = build_complex(&distances, diagonal, 1);
        assert_eq!(edges.max_dimension(), Some(1));
        assert_eq!(edges.f_vector(), vec![4, 6]);

        let vertices = build_complex(&distances, diagonal, 0);
        assert_eq!(vertices.f_vector(), vec![4]);
    }

    #[test]
    fn test_complexes_are_closed_and_monotone() {
        let points: Vec<Vec<f64>> = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.2],
            vec![2.1, 0.0],
            vec![1.1, 1.3],
            vec![0.2, 2.0],
            vec![2.4, 1.9],
        ];
        let distances = build_distance_matrix(&points, |a, b| euclidean(a, b)).unwrap();
        let complexes: Vec<_> = distances
            .distinct_scales()
            .into_iter()
            .map(|r| build_complex(&distances, r, 5))
            .collect();
        assert!(complexes.iter().all(SimplicialComplex::is_downward_closed));
        assert!(complexes
            .windows(2)
            .all(|pair| pair[0].is_subcomplex_of(&pair[1])));
        assert_eq!(complexes.last(), Some(&SimplicialComplex::full(6)));
    }

    #[test]
    fn test_greedy_walk_misses_a_clique() {
        let points = vec![
            vec![1.0, 2.0],
            vec![3.0, 3.0],
            vec![2.0, 0.0],
            vec![0.0, 2.0],
            vec![3.0, 0.0],
        ];
        let distances = build_distance_matrix(&points, |a, b| euclidean(a, b)).unwrap();
        let r = scale(3.0);
        // 0, 2 and 4 are pairwise within r
        for (a, b) in [(0, 2), (0, 4), (2, 4)] {
            assert!(distances.get(a, b) <= r);
        }

        let complex = build_complex(&distances, r, 4);
        assert!(!complex.contains(&simplex(&[0, 2, 4])));
        assert!(complex.contains(&simplex(&[0, 1, 4])));
        assert!(complex.contains(&simplex(&[0, 2, 3])));
        assert_eq!(complex.f_vector(), vec![5, 7, 2]);

        // Vertex 0 walks 0 -> 2 -> 3, never reaching 4
        let from_zero = find_big_simplices(&distances, r, 0, 4);
        assert!(from_zero.contains(&simplex(&[0, 2, 3])));
        assert!(!from_zero.contains(&simplex(&[0, 2, 4])));
    }

    #[test]
    fn test_no_points() {
        let distances = DistanceMatrix::from_rows(vec![]).unwrap();
        assert!(build_complex(&distances, scale(1.0), 0).is_empty());
    }
}
