//! Test utilities for gridbc development.
//!
//! Provides grid builders, deterministic data arrays and a catalogue of
//! boundary configurations covering every accepted shape. Shared by the
//! integration tests and the benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use gridbc_core::{GridAxis, GridShape};
use ndarray::{ArrayD, Dimension, IxDyn};

/// A 1D grid with unit spacing.
pub fn line(size: usize, periodic: bool) -> GridShape {
    GridShape::line(size, periodic).expect("fixture line size must be non-zero")
}

/// A 1D grid with the given spacing.
pub fn spaced_line(size: usize, periodic: bool, spacing: f64) -> GridShape {
    let axis = GridAxis::new(size, periodic)
        .and_then(|a| a.with_spacing(spacing))
        .expect("fixture axis must be valid");
    GridShape::new(vec![axis]).expect("one axis is never empty")
}

/// A grid from `(size, periodic)` pairs, unit spacing.
pub fn grid(axes: &[(usize, bool)]) -> GridShape {
    let axes = axes
        .iter()
        .map(|&(size, periodic)| GridAxis::new(size, periodic).expect("fixture axis size"))
        .collect();
    GridShape::new(axes).expect("fixture grid needs at least one axis")
}

/// Data whose value encodes its position: `Σ index[k] * 10^(ndim-1-k)`.
///
/// Every point of a grid with axes shorter than 10 gets a distinct value,
/// which makes misrouted reads easy to spot in assertion output.
pub fn positional(shape: &[usize]) -> ArrayD<f64> {
    ArrayD::from_shape_fn(IxDyn(shape), |ix| {
        ix.slice()
            .iter()
            .fold(0.0, |acc, &i| acc * 10.0 + i as f64)
    })
}

/// Smooth non-linear data: `sin` of a weighted index sum.
pub fn smooth(shape: &[usize]) -> ArrayD<f64> {
    ArrayD::from_shape_fn(IxDyn(shape), |ix| {
        let s: f64 = ix
            .slice()
            .iter()
            .enumerate()
            .map(|(k, &i)| (k + 1) as f64 * i as f64)
            .sum();
        (0.7 * s).sin() + 2.0
    })
}

/// `1, 2, ..., size` as a 1D array.
pub fn ramp(size: usize) -> ArrayD<f64> {
    ArrayD::from_shape_fn(IxDyn(&[size]), |ix| (ix[0] + 1) as f64)
}
