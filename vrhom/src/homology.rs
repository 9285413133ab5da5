//! Dimensions of mod-2 simplicial homology groups.

use log::debug;

use crate::{
    matrices::boundary_matrix,
    reduction::mod2_rank,
    simplex::SimplicialComplex,
    VrhomError,
};

/// Dimension of `H_k` of `complex` over `Z2`, i.e. `dim ker(d_k) - rank(d_{k+1})`.
///
/// The boundary maps are built from the simplices with `k + 2`, `k + 1` and `k` vertices.
/// Any of these lists may be empty (e.g. `k = 0` has no `(k-1)`-simplices), in which case the map has rank `0`.
/// If `k` exceeds the dimension of the complex the result is `0`.
///
/// Returns [`VrhomError::InconsistentRank`] if the difference would be negative,
/// which happens when `complex` is not downward-closed.
pub fn homology_dimension(complex: &SimplicialComplex, k: usize) -> Result<usize, VrhomError> {
    let Some(top_vertex_count) = k.checked_add(2) else {
        // No complex has simplices this large
        return Ok(0);
    };
    let k_plus_one_simplices = complex.with_vertex_count(top_vertex_count);
    let k_simplices = complex.with_vertex_count(k + 1);
    let k_minus_one_simplices = complex.with_vertex_count(k);

    let boundary_k_plus_one = boundary_matrix(&k_plus_one_simplices, &k_simplices)?;
    let boundary_k = boundary_matrix(&k_simplices, &k_minus_one_simplices)?;

    let image_k_plus_one = mod2_rank(&boundary_k_plus_one);
    let image_k = mod2_rank(&boundary_k);
    // Rank-nullity on C_k
    let kernel_k = k_simplices.len() - image_k;

    debug!(
        "H_{k}: {} {}-simplices, dim ker d_{k} = {kernel_k}, dim img d_{} = {image_k_plus_one}",
        k_simplices.len(),
        k,
        k + 1
    );

    kernel_k
        .checked_sub(image_k_plus_one)
        .ok_or(VrhomError::InconsistentRank {
            dimension: k,
            kernel: kernel_k,
            image: image_k_plus_one,
        })
}

/// The homology dimensions `[dim H_0, ..., dim H_max_k]`.
pub fn betti_numbers(complex: &SimplicialComplex, max_k: usize) -> Result<Vec<usize>, VrhomError> {
    (0..=max_k)
        .map(|k| homology_dimension(complex, k))
        .collect()
}
