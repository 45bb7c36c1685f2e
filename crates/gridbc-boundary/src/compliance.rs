//! Axis boundary compliance test helpers.
//!
//! These functions verify that an [`AxisBoundary`] satisfies the evaluation
//! contract on a given data array. Reused across the periodic, paired and
//! dispatch test modules.

use crate::axis::AxisBoundary;
use crate::data;
use gridbc_core::index::{with_axis, Index};
use gridbc_core::BoundaryError;
use ndarray::{ArrayD, ArrayViewD, Dimension, IxDyn};

const TOL: f64 = 1e-9;

/// Every point of `data` whose entry on the boundary axis is `0`, as a full index.
fn face_points(boundary: &AxisBoundary, data: &ArrayViewD<'_, f64>) -> Vec<Index> {
    ndarray::indices(IxDyn(data.shape()))
        .into_iter()
        .filter(|ix| ix[boundary.axis()] == 0)
        .map(|ix| ix.slice().iter().map(|&v| v as isize).collect())
        .collect()
}

fn line_range(boundary: &AxisBoundary) -> std::ops::RangeInclusive<isize> {
    -1..=boundary.size() as isize
}

/// Assert that interior points are returned unchanged.
pub fn assert_interior_passthrough(boundary: &AxisBoundary, data: &ArrayViewD<'_, f64>) {
    for face in face_points(boundary, data) {
        for i in 0..boundary.size() as isize {
            let idx = with_axis(&face, boundary.axis(), i);
            let got = boundary.virtual_point(data, &idx, None).unwrap();
            let want = data::read_point(data, &idx).unwrap();
            assert_eq!(got, want, "interior point {idx:?} changed: {got} != {want}");
        }
    }
}

/// Assert that both one-step-outside points evaluate without a fill value.
pub fn assert_ghosts_defined(boundary: &AxisBoundary, data: &ArrayViewD<'_, f64>) {
    for face in face_points(boundary, data) {
        for i in [-1, boundary.size() as isize] {
            let idx = with_axis(&face, boundary.axis(), i);
            let got = boundary.virtual_point(data, &idx, None);
            assert!(got.is_ok(), "ghost {idx:?} failed: {got:?}");
            assert!(got.unwrap().is_finite(), "ghost {idx:?} is not finite");
        }
    }
}

/// Assert that `region(i)` equals three point evaluations at `i-1, i, i+1`.
pub fn assert_region_composes_points(boundary: &AxisBoundary, data: &ArrayViewD<'_, f64>) {
    let axis = boundary.axis();
    for face in face_points(boundary, data) {
        for i in 0..boundary.size() as isize {
            let idx = with_axis(&face, axis, i);
            let region = boundary.region(data, &idx, None).unwrap();
            let points = (
                boundary.virtual_point(data, &with_axis(&face, axis, i - 1), None).unwrap(),
                boundary.virtual_point(data, &idx, None).unwrap(),
                boundary.virtual_point(data, &with_axis(&face, axis, i + 1), None).unwrap(),
            );
            assert_eq!(region, points, "region at {idx:?} disagrees with point evaluation");
        }
    }
}

/// Assert that the sparse coefficient form reproduces direct evaluation.
pub fn assert_sparse_matches_direct(boundary: &AxisBoundary, data: &ArrayViewD<'_, f64>) {
    let axis = boundary.axis();
    for face in face_points(boundary, data) {
        for i in line_range(boundary) {
            let idx = with_axis(&face, axis, i);
            let direct = boundary.virtual_point(data, &idx, None).unwrap();
            let sparse = boundary
                .coefficients(&idx, None)
                .unwrap()
                .evaluate(|j| data::read_point(data, &with_axis(&face, axis, j)))
                .unwrap();
            assert!(
                (direct - sparse).abs() < TOL,
                "at {idx:?}: direct {direct} != sparse {sparse}"
            );
        }
    }
}

/// Assert that evaluating twice gives identical results.
pub fn assert_deterministic(boundary: &AxisBoundary, data: &ArrayViewD<'_, f64>) {
    for face in face_points(boundary, data) {
        for i in line_range(boundary) {
            let idx = with_axis(&face, boundary.axis(), i);
            let a: Result<f64, BoundaryError> = boundary.virtual_point(data, &idx, None);
            let b = boundary.virtual_point(data, &idx, None);
            assert_eq!(a, b, "virtual_point at {idx:?} is non-deterministic");
        }
    }
}

/// Run all compliance checks on a boundary.
pub fn run_full_compliance(boundary: &AxisBoundary, data: &ArrayD<f64>) {
    let view = data.view();
    assert_interior_passthrough(boundary, &view);
    assert_ghosts_defined(boundary, &view);
    assert_region_composes_points(boundary, &view);
    assert_sparse_matches_direct(boundary, &view);
    assert_deterministic(boundary, &view);
}
