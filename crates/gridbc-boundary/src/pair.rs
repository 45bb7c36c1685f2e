//! Lower/upper boundary-condition pairs for bounded axes.

use crate::condition::BoundaryCondition;
use crate::data;
use crate::sparse::SparseRow;
use crate::value::{self, BcValue};
use gridbc_core::index::{transverse, with_axis};
use gridbc_core::BoundaryError;
use ndarray::ArrayViewD;

/// The two boundary conditions of a non-periodic axis.
///
/// Virtual points at `-1` come from the lower condition and at `size` from
/// the upper one. Interior points are returned unchanged. Anything further
/// out is only answerable with an explicit fill value.
///
/// # Examples
///
/// ```
/// use gridbc_boundary::{BoundaryCondition, BoundaryPair, ConditionRule};
/// use gridbc_core::{GridShape, Side};
/// use ndarray::array;
///
/// let grid = GridShape::line(4, false).unwrap();
/// let low = BoundaryCondition::new(&grid, 0, Side::Lower, ConditionRule::Value(0.0.into())).unwrap();
/// let high = BoundaryCondition::new(&grid, 0, Side::Upper, ConditionRule::Value(0.0.into())).unwrap();
/// let pair = BoundaryPair::new(low, high).unwrap();
///
/// let data = array![1.0, 2.0, 3.0, 4.0].into_dyn();
/// let view = data.view();
/// assert_eq!(pair.virtual_point(&view, &[-1], None).unwrap(), 0.0);
/// assert_eq!(pair.virtual_point(&view, &[4], None).unwrap(), 0.0);
/// assert!(pair.virtual_point(&view, &[-2], None).is_err());
/// assert_eq!(pair.virtual_point(&view, &[-2], Some(7.5)).unwrap(), 7.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryPair {
    low: BoundaryCondition,
    high: BoundaryCondition,
}

impl BoundaryPair {
    /// Combine a lower and an upper condition.
    ///
    /// Returns `Err(InvalidConfiguration)` if the conditions refer to
    /// different axes, `low` is tagged upper, `high` is not tagged upper,
    /// or the axis is periodic.
    pub fn new(low: BoundaryCondition, high: BoundaryCondition) -> Result<Self, BoundaryError> {
        if low.axis() != high.axis() {
            return Err(BoundaryError::invalid(format!(
                "boundary conditions refer to different axes: low is on axis {}, high is on axis {}",
                low.axis(),
                high.axis()
            )));
        }
        if low.size() != high.size() {
            return Err(BoundaryError::invalid(format!(
                "boundary conditions on axis {} disagree on axis size: {} vs {}",
                low.axis(),
                low.size(),
                high.size()
            )));
        }
        if low.is_upper() {
            return Err(BoundaryError::invalid(format!(
                "low boundary condition on axis {} is tagged upper",
                low.axis()
            )));
        }
        if !high.is_upper() {
            return Err(BoundaryError::invalid(format!(
                "high boundary condition on axis {} is not tagged upper",
                high.axis()
            )));
        }
        if low.is_periodic_axis() {
            return Err(BoundaryError::invalid(format!(
                "axis {} is periodic and cannot carry lower/upper boundary conditions",
                low.axis()
            )));
        }
        Ok(Self { low, high })
    }

    /// Axis this pair applies to.
    pub fn axis(&self) -> usize {
        self.low.axis()
    }

    /// Number of points along the axis.
    pub fn size(&self) -> usize {
        self.low.size()
    }

    /// Condition for the lower side.
    pub fn low(&self) -> &BoundaryCondition {
        &self.low
    }

    /// Condition for the upper side.
    pub fn high(&self) -> &BoundaryCondition {
        &self.high
    }

    fn domain_error(&self, index: isize) -> BoundaryError {
        BoundaryError::DomainError {
            axis: self.axis(),
            index,
            size: self.size(),
        }
    }

    /// Value at `index`: a real point, a virtual point one step outside,
    /// or `fill` for anything further out.
    pub fn virtual_point(
        &self,
        data: &ArrayViewD<'_, f64>,
        index: &[isize],
        fill: Option<f64>,
    ) -> Result<f64, BoundaryError> {
        let axis = self.axis();
        let i = data::axis_entry(index, axis)?;
        let n = self.size() as isize;
        if i == -1 {
            self.low.virtual_point(data, &transverse(index, axis))
        } else if i == n {
            self.high.virtual_point(data, &transverse(index, axis))
        } else if (0..n).contains(&i) {
            data::read_point(data, index)
        } else {
            log::trace!("axis {axis}: index {i} outside [-1, {n}], fill = {fill:?}");
            fill.ok_or_else(|| self.domain_error(i))
        }
    }

    /// `(left, center, right)` around `index` for a 3-point stencil.
    pub fn region(
        &self,
        data: &ArrayViewD<'_, f64>,
        index: &[isize],
        fill: Option<f64>,
    ) -> Result<(f64, f64, f64), BoundaryError> {
        let axis = self.axis();
        let i = data::axis_entry(index, axis)?;
        let neighbour = |j: Option<isize>| match j {
            Some(j) => self.virtual_point(data, &with_axis(index, axis, j), fill),
            None => fill.ok_or_else(|| self.domain_error(i)),
        };
        Ok((
            neighbour(i.checked_sub(1))?,
            self.virtual_point(data, index, fill)?,
            neighbour(i.checked_add(1))?,
        ))
    }

    /// Sparse form of [`virtual_point`](Self::virtual_point).
    pub fn coefficients(&self, index: &[isize], fill: Option<f64>) -> Result<SparseRow, BoundaryError> {
        let axis = self.axis();
        let i = data::axis_entry(index, axis)?;
        let n = self.size() as isize;
        if i == -1 {
            self.low.coefficients(&transverse(index, axis))
        } else if i == n {
            self.high.coefficients(&transverse(index, axis))
        } else if (0..n).contains(&i) {
            value::check_transverse(axis, &transverse(index, axis), self.low.transverse_shape())?;
            Ok(SparseRow::identity(i))
        } else {
            fill.map(SparseRow::constant)
                .ok_or_else(|| self.domain_error(i))
        }
    }

    /// Apply the same value to both sides.
    ///
    /// Either both conditions are updated or neither is.
    pub fn set_value(&mut self, value: BcValue) -> Result<(), BoundaryError> {
        let mut low = self.low.clone();
        let mut high = self.high.clone();
        low.set_value(value.clone())?;
        high.set_value(value)?;
        self.low = low;
        self.high = high;
        Ok(())
    }
}
