//! Multi-dimensional point indices.
//!
//! Indices are signed so that virtual points just outside the grid (`-1`
//! and `size` along the boundary axis) can be addressed with the same type
//! as interior points.

use smallvec::SmallVec;

/// A point index into a structured grid, one signed entry per axis.
///
/// Uses `SmallVec<[isize; 4]>` so grids up to 4D stay on the stack.
pub type Index = SmallVec<[isize; 4]>;

/// Return a copy of `index` with the entry for `axis` replaced by `value`.
///
/// # Panics
///
/// Panics if `axis >= index.len()`.
pub fn with_axis(index: &[isize], axis: usize, value: isize) -> Index {
    let mut out: Index = SmallVec::from_slice(index);
    out[axis] = value;
    out
}

/// Return `index` with the entry for `axis` removed.
///
/// The result addresses a location on the boundary face orthogonal to
/// `axis`. Out-of-range `axis` returns the index unchanged.
pub fn transverse(index: &[isize], axis: usize) -> Index {
    index
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != axis)
        .map(|(_, &v)| v)
        .collect()
}

/// Convert a signed index to `usize` positions if every entry is in range
/// for `shape`. Returns `None` on any negative or oversized entry, or on
/// a dimension mismatch.
pub fn to_position(index: &[isize], shape: &[usize]) -> Option<SmallVec<[usize; 4]>> {
    if index.len() != shape.len() {
        return None;
    }
    index
        .iter()
        .zip(shape)
        .map(|(&i, &n)| {
            if i >= 0 && (i as usize) < n {
                Some(i as usize)
            } else {
                None
            }
        })
        .collect()
}
