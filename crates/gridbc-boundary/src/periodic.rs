//! Periodic (wraparound) axis boundaries.

use crate::data;
use crate::sparse::SparseRow;
use crate::value;
use gridbc_core::index::{transverse, with_axis};
use gridbc_core::{BoundaryError, GridShape};
use ndarray::ArrayViewD;

/// Boundary of a periodic axis: virtual points wrap to the opposite edge.
///
/// With `flip_sign` set the axis is anti-periodic: every wrap across the
/// edge negates the value.
///
/// # Examples
///
/// ```
/// use gridbc_boundary::PeriodicBoundary;
/// use gridbc_core::GridShape;
/// use ndarray::array;
///
/// let grid = GridShape::line(5, true).unwrap();
/// let b = PeriodicBoundary::new(&grid, 0, false).unwrap();
/// let data = array![10.0, 20.0, 30.0, 40.0, 50.0].into_dyn();
/// let view = data.view();
/// assert_eq!(b.virtual_point(&view, &[5], None).unwrap(), 10.0);
/// assert_eq!(b.region(&view, &[4], None).unwrap(), (40.0, 50.0, 10.0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodicBoundary {
    axis: usize,
    size: usize,
    flip_sign: bool,
    transverse_shape: Vec<usize>,
}

impl PeriodicBoundary {
    /// Create the boundary for `axis` of `grid`.
    ///
    /// Returns `Err(InvalidConfiguration)` if the axis is missing or not
    /// periodic.
    pub fn new(grid: &GridShape, axis: usize, flip_sign: bool) -> Result<Self, BoundaryError> {
        let grid_axis = grid.axis(axis)?;
        if !grid_axis.is_periodic() {
            return Err(BoundaryError::invalid(format!(
                "periodic boundary requested for non-periodic axis {axis}"
            )));
        }
        Ok(Self {
            axis,
            size: grid_axis.size(),
            flip_sign,
            transverse_shape: grid.transverse_shape(axis),
        })
    }

    /// Axis this boundary applies to.
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// Number of points along the axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether values change sign across the edge.
    pub fn flip_sign(&self) -> bool {
        self.flip_sign
    }

    /// Map any index along the axis into `[0, size)`, returning the sign
    /// picked up on the way.
    pub fn wrap(&self, i: isize) -> (isize, f64) {
        let n = self.size as isize;
        let wrapped = i.rem_euclid(n);
        let crossings = i.div_euclid(n);
        let sign = if self.flip_sign && crossings % 2 != 0 {
            -1.0
        } else {
            1.0
        };
        (wrapped, sign)
    }

    /// Value at `index`, wrapping the entry for this axis.
    ///
    /// Every integer maps to a real point, so `fill` is never consulted;
    /// it is accepted to keep the interface uniform with paired boundaries.
    pub fn virtual_point(
        &self,
        data: &ArrayViewD<'_, f64>,
        index: &[isize],
        _fill: Option<f64>,
    ) -> Result<f64, BoundaryError> {
        let i = data::axis_entry(index, self.axis)?;
        let (wrapped, sign) = self.wrap(i);
        Ok(sign * data::read_point(data, &with_axis(index, self.axis, wrapped))?)
    }

    /// `(left, center, right)` around `index` for a 3-point stencil.
    ///
    /// The neighbours are taken around the wrapped index, so every `isize`
    /// is accepted.
    pub fn region(
        &self,
        data: &ArrayViewD<'_, f64>,
        index: &[isize],
        _fill: Option<f64>,
    ) -> Result<(f64, f64, f64), BoundaryError> {
        let i = data::axis_entry(index, self.axis)?;
        let (m, sign) = self.wrap(i);
        let at = |j: isize| -> Result<f64, BoundaryError> {
            let (k, s) = self.wrap(j);
            Ok(sign * s * data::read_point(data, &with_axis(index, self.axis, k))?)
        };
        Ok((at(m - 1)?, at(m)?, at(m + 1)?))
    }

    /// Sparse form of [`virtual_point`](Self::virtual_point): a single
    /// `±1` weight on the wrapped index.
    pub fn coefficients(&self, index: &[isize], _fill: Option<f64>) -> Result<SparseRow, BoundaryError> {
        let i = data::axis_entry(index, self.axis)?;
        value::check_transverse(self.axis, &transverse(index, self.axis), &self.transverse_shape)?;
        let (wrapped, sign) = self.wrap(i);
        Ok(SparseRow::constant(0.0).with_weight(wrapped, sign))
    }
}
