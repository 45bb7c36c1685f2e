//! Bounds-checked reads from caller-supplied data arrays.

use gridbc_core::index::{self, Index};
use gridbc_core::BoundaryError;
use ndarray::ArrayViewD;

/// Read the value at a real grid point.
///
/// Fails with `DomainError` naming the first out-of-range component, or
/// `InvalidConfiguration` if `idx` and `data` disagree on dimensionality.
pub(crate) fn read_point(data: &ArrayViewD<'_, f64>, idx: &[isize]) -> Result<f64, BoundaryError> {
    if idx.len() != data.ndim() {
        return Err(BoundaryError::invalid(format!(
            "index has {} entries but data is {}-dimensional",
            idx.len(),
            data.ndim()
        )));
    }
    match index::to_position(idx, data.shape()) {
        Some(pos) => data
            .get(pos.as_slice())
            .copied()
            .ok_or_else(|| out_of_range(idx, data.shape())),
        None => Err(out_of_range(idx, data.shape())),
    }
}

/// Rebuild a full index from a boundary-face index by inserting `value`
/// at position `axis`.
pub(crate) fn insert_axis(transverse: &[isize], axis: usize, value: isize) -> Index {
    let mut out = Index::with_capacity(transverse.len() + 1);
    out.extend_from_slice(&transverse[..axis.min(transverse.len())]);
    out.push(value);
    if axis < transverse.len() {
        out.extend_from_slice(&transverse[axis..]);
    }
    out
}

/// Read the entry for `axis` from a full index.
pub(crate) fn axis_entry(idx: &[isize], axis: usize) -> Result<isize, BoundaryError> {
    idx.get(axis).copied().ok_or_else(|| {
        BoundaryError::invalid(format!(
            "index has {} entries, expected an entry for axis {axis}",
            idx.len()
        ))
    })
}

fn out_of_range(idx: &[isize], shape: &[usize]) -> BoundaryError {
    idx.iter()
        .zip(shape)
        .enumerate()
        .find(|(_, (&i, &n))| i < 0 || i as usize >= n)
        .map(|(axis, (&index, &size))| BoundaryError::DomainError { axis, index, size })
        .unwrap_or_else(|| {
            BoundaryError::invalid(format!(
                "index {idx:?} does not address data of shape {shape:?}"
            ))
        })
}
