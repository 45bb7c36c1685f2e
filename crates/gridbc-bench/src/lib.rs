//! Benchmark profiles for gridbc.
//!
//! Provides pre-built grids and boundaries for benchmarking:
//!
//! - [`reference_profile`]: 256x256 grid, periodic x and mixed-condition y
//! - [`stress_profile`]: 64x64x64 grid with a different bounded rule per axis
//! - [`random_field`]: deterministic data via a seeded ChaCha8 RNG

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridbc_boundary::GridBoundaries;
use gridbc_core::{BoundaryError, GridAxis, GridShape};
use ndarray::{ArrayD, IxDyn};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::json;

/// Build the reference profile: 256x256 grid (65K points).
///
/// Axis 0 is periodic; axis 1 has a Dirichlet lower side and a Robin
/// upper side, so both the wraparound and the paired paths are exercised.
pub fn reference_profile() -> Result<GridBoundaries, BoundaryError> {
    let grid = GridShape::new(vec![
        GridAxis::new(256, true)?,
        GridAxis::new(256, false)?.with_spacing(0.01)?,
    ])?;
    GridBoundaries::from_value(
        &grid,
        &json!([
            "periodic",
            {"low": {"value": 1.0}, "high": {"type": "robin", "value": 0.5, "const": 2.0}}
        ]),
    )
}

/// Build the stress profile: 64x64x64 grid (262K points), every axis bounded.
pub fn stress_profile() -> Result<GridBoundaries, BoundaryError> {
    let axis = GridAxis::new(64, false)?;
    let grid = GridShape::new(vec![axis; 3])?;
    GridBoundaries::from_value(
        &grid,
        &json!(["neumann", ["extrapolate", {"curvature": 1.0}], {"derivative": -0.5}]),
    )
}

/// Generate a field of uniform values in `[0, 1)` from `seed`.
///
/// The same seed always produces the same field.
pub fn random_field(shape: &[usize], seed: u64) -> ArrayD<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    ArrayD::from_shape_simple_fn(IxDyn(shape), || unit_f64(rng.next_u64()))
}

fn unit_f64(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_build() {
        assert_eq!(reference_profile().unwrap().grid().shape(), vec![256, 256]);
        assert_eq!(stress_profile().unwrap().grid().ndim(), 3);
    }

    #[test]
    fn random_field_is_deterministic() {
        let a = random_field(&[4, 5], 7);
        let b = random_field(&[4, 5], 7);
        let c = random_field(&[4, 5], 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|&v| (0.0..1.0).contains(&v)));
    }
}
