//! Dense operator assembly with boundaries folded in.
//!
//! The boundary rows come from [`AxisBoundary::coefficients`], so every
//! condition that evaluates directly also assembles.

use crate::axis::AxisBoundary;
use crate::grid::GridBoundaries;
use crate::sparse::SparseRow;
use gridbc_core::BoundaryError;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// An affine operator `y = matrix · x + offset` on a 1D grid.
///
/// # Examples
///
/// ```
/// use gridbc_boundary::{GridBoundaries, LinearOperator};
/// use gridbc_core::GridShape;
/// use ndarray::array;
/// use serde_json::json;
///
/// let grid = GridShape::line(4, false).unwrap();
/// let bcs = GridBoundaries::from_value(&grid, &json!({"value": 1})).unwrap();
/// let op = LinearOperator::laplacian_1d(&bcs).unwrap();
/// // A constant field equal to the boundary value has zero curvature.
/// let y = op.apply(&array![1.0, 1.0, 1.0, 1.0].view()).unwrap();
/// assert!(y.iter().all(|v| v.abs() < 1e-12));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LinearOperator {
    matrix: Array2<f64>,
    offset: Array1<f64>,
}

impl LinearOperator {
    /// Second-difference operator `(u[i-1] - 2 u[i] + u[i+1]) / dx²` with
    /// the virtual points at `-1` and `size` expressed through the axis
    /// boundary.
    ///
    /// Returns `Err(InvalidConfiguration)` unless the grid is 1D.
    pub fn laplacian_1d(bcs: &GridBoundaries) -> Result<Self, BoundaryError> {
        let grid = bcs.grid();
        if grid.ndim() != 1 {
            return Err(BoundaryError::invalid(format!(
                "operator assembly needs a 1D grid, got {}D",
                grid.ndim()
            )));
        }
        let axis = grid.axis(0)?;
        let boundary = bcs.axis(0)?;
        let n = axis.size();
        let scale = 1.0 / (axis.spacing() * axis.spacing());

        let mut matrix = Array2::zeros((n, n));
        let mut offset = Array1::zeros(n);
        for i in 0..n as isize {
            let mut row = boundary.coefficients(&[i - 1], None)?;
            merge(&mut row, &boundary.coefficients(&[i + 1], None)?);
            row.add_weight(i, -2.0);
            let row = row.scaled(scale);

            let r = i as usize;
            offset[r] = row.offset();
            for (&j, &w) in row.weights() {
                matrix[[r, column(boundary, j)?]] += w;
            }
        }
        log::debug!("assembled {n}x{n} laplacian");
        Ok(Self { matrix, offset })
    }

    /// Number of grid points the operator acts on.
    pub fn size(&self) -> usize {
        self.offset.len()
    }

    /// Coefficient matrix.
    pub fn matrix(&self) -> ArrayView2<'_, f64> {
        self.matrix.view()
    }

    /// Constant term contributed by inhomogeneous boundaries.
    pub fn offset(&self) -> ArrayView1<'_, f64> {
        self.offset.view()
    }

    /// Apply the operator to `data`.
    pub fn apply(&self, data: &ArrayView1<'_, f64>) -> Result<Array1<f64>, BoundaryError> {
        if data.len() != self.size() {
            return Err(BoundaryError::invalid(format!(
                "operator acts on {} points, got {}",
                self.size(),
                data.len()
            )));
        }
        Ok(self.matrix.dot(data) + &self.offset)
    }
}

fn merge(into: &mut SparseRow, other: &SparseRow) {
    into.add_offset(other.offset());
    for (&j, &w) in other.weights() {
        into.add_weight(j, w);
    }
}

fn column(boundary: &AxisBoundary, j: isize) -> Result<usize, BoundaryError> {
    usize::try_from(j)
        .ok()
        .filter(|&c| c < boundary.size())
        .ok_or(BoundaryError::DomainError {
            axis: boundary.axis(),
            index: j,
            size: boundary.size(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbc_core::{GridAxis, GridShape};
    use ndarray::{array, Array1};
    use serde_json::json;

    fn line(size: usize, periodic: bool, dx: f64) -> GridShape {
        GridShape::new(vec![GridAxis::new(size, periodic)
            .unwrap()
            .with_spacing(dx)
            .unwrap()])
        .unwrap()
    }

    #[test]
    fn dirichlet_zero_is_standard_tridiagonal() {
        let bcs = GridBoundaries::from_value(&line(4, false, 1.0), &json!({"value": 0})).unwrap();
        let op = LinearOperator::laplacian_1d(&bcs).unwrap();
        // Virtual points equal the value, so the ghost contributes to the
        // offset only.
        assert_eq!(op.matrix()[[0, 0]], -2.0);
        assert_eq!(op.matrix()[[0, 1]], 1.0);
        assert_eq!(op.matrix()[[3, 3]], -2.0);
        assert_eq!(op.matrix()[[3, 0]], 0.0);
        assert_eq!(op.offset(), Array1::<f64>::zeros(4).view());
    }

    #[test]
    fn periodic_is_circulant() {
        let bcs = GridBoundaries::from_value(&line(5, true, 1.0), &json!("periodic")).unwrap();
        let op = LinearOperator::laplacian_1d(&bcs).unwrap();
        assert_eq!(op.matrix()[[0, 4]], 1.0);
        assert_eq!(op.matrix()[[4, 0]], 1.0);
        for r in 0..5 {
            assert_eq!(op.matrix().row(r).sum(), 0.0);
        }
    }

    #[test]
    fn anti_periodic_flips_wrapped_entries() {
        let bcs = GridBoundaries::from_value(&line(4, true, 1.0), &json!("anti-periodic")).unwrap();
        let op = LinearOperator::laplacian_1d(&bcs).unwrap();
        assert_eq!(op.matrix()[[0, 3]], -1.0);
        assert_eq!(op.matrix()[[3, 0]], -1.0);
    }

    #[test]
    fn single_point_periodic_axis_is_zero() {
        let bcs = GridBoundaries::from_value(&line(1, true, 1.0), &json!("periodic")).unwrap();
        let op = LinearOperator::laplacian_1d(&bcs).unwrap();
        assert_eq!(op.matrix()[[0, 0]], 0.0);
    }

    #[test]
    fn apply_matches_region_stencil() {
        let dx = 0.5;
        let grid = line(6, false, dx);
        let spec = json!({
            "low": {"type": "mixed", "value": 2.0, "const": 1.0},
            "high": {"curvature": 3.0}
        });
        let bcs = GridBoundaries::from_value(&grid, &spec).unwrap();
        let op = LinearOperator::laplacian_1d(&bcs).unwrap();

        let data = array![1.0, 4.0, 2.0, -1.0, 0.5, 3.0];
        let got = op.apply(&data.view()).unwrap();
        let dyn_data = data.clone().into_dyn();
        let boundary = bcs.axis(0).unwrap();
        for i in 0..6 {
            let (l, c, r) = boundary.region(&dyn_data.view(), &[i as isize], None).unwrap();
            let want = (l - 2.0 * c + r) / (dx * dx);
            assert!((got[i] - want).abs() < 1e-9, "row {i}: {} != {want}", got[i]);
        }
    }

    #[test]
    fn inhomogeneous_value_lands_in_offset() {
        let bcs = GridBoundaries::from_value(&line(3, false, 1.0), &json!([{"value": 2}, {"value": 5}]))
            .unwrap();
        let op = LinearOperator::laplacian_1d(&bcs).unwrap();
        assert_eq!(op.offset(), array![2.0, 0.0, 5.0].view());
    }

    #[test]
    fn rejects_multi_dimensional_grids() {
        let grid = GridShape::new(vec![
            GridAxis::new(3, false).unwrap(),
            GridAxis::new(3, false).unwrap(),
        ])
        .unwrap();
        let bcs = GridBoundaries::from_value(&grid, &json!("neumann")).unwrap();
        assert!(matches!(
            LinearOperator::laplacian_1d(&bcs),
            Err(BoundaryError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn apply_checks_length() {
        let bcs = GridBoundaries::from_value(&line(3, false, 1.0), &json!("neumann")).unwrap();
        let op = LinearOperator::laplacian_1d(&bcs).unwrap();
        assert!(op.apply(&array![1.0, 2.0].view()).is_err());
    }
}
