//! Abstract simplices and simplicial complexes on vertices `0..n`.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt::Debug;

use itertools::Itertools;

/// A non-empty set of vertex indices, stored in strictly ascending order.
///
/// A simplex with `m + 1` vertices has dimension `m`.
/// Simplices are ordered first by the number of vertices and then lexicographically,
/// so a [`SimplicialComplex`] iterates through its simplices one dimension at a time.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Simplex(Vec<usize>);

impl Simplex {
    /// Vertex order and repeats are irrelevant.
    /// Returns `None` for the empty set, which is never a simplex.
    pub fn from_vertices(vertices: impl IntoIterator<Item = usize>) -> Option<Self> {
        let mut vertices: Vec<usize> = vertices.into_iter().collect();
        vertices.sort_unstable();
        vertices.dedup();
        if vertices.is_empty() {
            None
        } else {
            Some(Self(vertices))
        }
    }

    pub fn vertex(vertex: usize) -> Self {
        Self(vec![vertex])
    }

    pub fn vertices(&self) -> &[usize] {
        &self.0
    }

    pub fn n_vertices(&self) -> usize {
        self.0.len()
    }

    pub fn dimension(&self) -> usize {
        self.0.len() - 1
    }

    pub fn contains_vertex(&self, vertex: usize) -> bool {
        self.0.binary_search(&vertex).is_ok()
    }

    /// True if every vertex of `self` is a vertex of `other` (including `self == other`).
    pub fn is_subset_of(&self, other: &Simplex) -> bool {
        if self.0.len() > other.0.len() {
            return false;
        }
        let mut others = other.0.iter();
        self.0
            .iter()
            .all(|v| others.by_ref().any(|w| w == v))
    }

    /// True if `self` is a codimension-1 face of `other`.
    pub fn is_facet_of(&self, other: &Simplex) -> bool {
        self.0.len() + 1 == other.0.len() && self.is_subset_of(other)
    }

    /// All non-empty subsets, `self` included.
    pub fn faces(&self) -> impl Iterator<Item = Simplex> + '_ {
        self.0
            .iter()
            .copied()
            .powerset()
            .filter(|subset| !subset.is_empty())
            .map(Simplex)
    }

    /// The codimension-1 faces, obtained by dropping one vertex at a time.
    pub fn facets(&self) -> impl Iterator<Item = Simplex> + '_ {
        (0..self.0.len()).filter_map(move |i| {
            Simplex::from_vertices(
                self.0
                    .iter()
                    .enumerate()
                    .filter(move |(j, _v)| *j != i)
                    .map(|(_j, v)| *v),
            )
        })
    }
}

impl Debug for Simplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(&self.0).finish()
    }
}

impl PartialOrd for Simplex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Simplex {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0.len(), &self.0).cmp(&(other.0.len(), &other.0))
    }
}

/// A finite set of simplices.
///
/// Complexes built through [`insert_with_faces`](SimplicialComplex::insert_with_faces) are downward-closed,
/// complexes assembled with [`insert`](SimplicialComplex::insert) need not be, see [`is_downward_closed`](SimplicialComplex::is_downward_closed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimplicialComplex {
    simplices: BTreeSet<Simplex>,
}

impl SimplicialComplex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts only `simplex`, not its faces.
    pub fn insert(&mut self, simplex: Simplex) -> bool {
        self.simplices.insert(simplex)
    }

    /// Inserts `simplex` together with every non-empty subset of its vertices.
    pub fn insert_with_faces(&mut self, simplex: &Simplex) {
        // In a downward-closed complex the faces are already present
        if self.simplices.contains(simplex) {
            return;
        }
        self.simplices.extend(simplex.faces());
    }

    /// The complex of all non-empty subsets of `0..n_vertices`.
    pub fn full(n_vertices: usize) -> Self {
        let mut complex = Self::new();
        if let Some(top) = Simplex::from_vertices(0..n_vertices) {
            complex.insert_with_faces(&top);
        }
        complex
    }

    pub fn contains(&self, simplex: &Simplex) -> bool {
        self.simplices.contains(simplex)
    }

    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Simplex> {
        self.simplices.iter()
    }

    /// Simplices with exactly `n_vertices` vertices, in ascending order.
    /// Asking for `0` vertices always yields nothing.
    pub fn with_vertex_count(&self, n_vertices: usize) -> Vec<&Simplex> {
        self.simplices
            .iter()
            .filter(|s| s.n_vertices() == n_vertices)
            .collect()
    }

    pub fn in_dimension(&self, dimension: usize) -> Vec<&Simplex> {
        self.with_vertex_count(dimension + 1)
    }

    /// `None` for the empty complex.
    pub fn max_dimension(&self) -> Option<usize> {
        self.simplices.last().map(Simplex::dimension)
    }

    /// Counts of simplices in each dimension `0..=max_dimension`.
    pub fn f_vector(&self) -> Vec<usize> {
        let Some(max_dim) = self.max_dimension() else {
            return vec![];
        };
        let mut counts = vec![0; max_dim + 1];
        for simplex in self.simplices.iter() {
            counts[simplex.dimension()] += 1;
        }
        counts
    }

    /// Every facet of every member is also a member.
    /// Checking facets suffices, by induction on the dimension.
    pub fn is_downward_closed(&self) -> bool {
        self.simplices
            .iter()
            .all(|simplex| simplex.facets().all(|facet| self.contains(&facet)))
    }

    pub fn is_subcomplex_of(&self, other: &SimplicialComplex) -> bool {
        self.simplices.is_subset(&other.simplices)
    }
}

impl FromIterator<Simplex> for SimplicialComplex {
    fn from_iter<T: IntoIterator<Item = Simplex>>(iter: T) -> Self {
        Self {
            simplices: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SimplicialComplex {
    type Item = &'a Simplex;
    type IntoIter = std::collections::btree_set::Iter<'a, Simplex>;

    fn into_iter(self) -> Self::IntoIter {
        self.simplices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Simplex, SimplicialComplex};

    fn simplex(vertices: &[usize]) -> Simplex {
        Simplex::from_vertices(vertices.iter().copied()).unwrap()
    }

    #[test]
    fn test_simplex_is_a_set() {
        assert_eq!(simplex(&[2, 0, 1]), simplex(&[0, 1, 2]));
        assert_eq!(simplex(&[3, 3, 1]).vertices(), &[1, 3]);
        assert_eq!(Simplex::from_vertices(vec![]), None);
        assert_eq!(simplex(&[4, 7]).dimension(), 1);
    }

    #[test]
    fn test_subsets() {
        let edge = simplex(&[1, 3]);
        let triangle = simplex(&[1, 2, 3]);
        assert!(edge.is_subset_of(&triangle));
        assert!(edge.is_facet_of(&triangle));
        assert!(!simplex(&[1, 4]).is_subset_of(&triangle));
        assert!(!simplex(&[1]).is_facet_of(&triangle));
        assert!(!triangle.is_subset_of(&edge));
        assert!(triangle.is_subset_of(&triangle));
    }

    #[test]
    fn test_faces() {
        let triangle = simplex(&[0, 1, 2]);
        let faces: Vec<_> = triangle.faces().collect();
        assert_eq!(faces.len(), 7);
        let facets: Vec<_> = triangle.facets().collect();
        assert_eq!(facets, vec![simplex(&[1, 2]), simplex(&[0, 2]), simplex(&[0, 1])]);
        assert_eq!(simplex(&[5]).facets().count(), 0);
    }

    #[test]
    fn test_ordering_by_dimension() {
        let complex: SimplicialComplex =
            vec![simplex(&[0, 1]), simplex(&[2]), simplex(&[0]), simplex(&[1])]
                .into_iter()
                .collect();
        let order: Vec<_> = complex.iter().cloned().collect();
        assert_eq!(
            order,
            vec![simplex(&[0]), simplex(&[1]), simplex(&[2]), simplex(&[0, 1])]
        );
        assert_eq!(complex.max_dimension(), Some(1));
        assert_eq!(complex.f_vector(), vec![3, 1]);
    }

    #[test]
    fn test_insert_with_faces_is_closed() {
        let mut complex = SimplicialComplex::new();
        complex.insert_with_faces(&simplex(&[0, 1, 2, 3]));
        complex.insert_with_faces(&simplex(&[3, 4]));
        assert!(complex.is_downward_closed());
        assert_eq!(complex.len(), 15 + 2);
        assert_eq!(complex.in_dimension(1).len(), 7);
        assert!(complex.with_vertex_count(0).is_empty());
    }

    #[test]
    fn test_not_downward_closed() {
        let mut complex = SimplicialComplex::new();
        complex.insert(simplex(&[0, 1]));
        complex.insert(simplex(&[0]));
        assert!(!complex.is_downward_closed());
    }

    #[test]
    fn test_full_and_subcomplex() {
        let full = SimplicialComplex::full(4);
        assert_eq!(full.len(), 15);
        assert!(SimplicialComplex::full(0).is_empty());

        let mut edge = SimplicialComplex::new();
        edge.insert_with_faces(&simplex(&[1, 2]));
        assert!(edge.is_subcomplex_of(&full));
        assert!(!full.is_subcomplex_of(&edge));
    }
}
