//! Boundaries for every axis of a grid, and ghost-cell filling.

use crate::axis::AxisBoundary;
use crate::spec::BoundarySpec;
use crate::value::BcValue;
use gridbc_core::{BoundaryError, GridShape};
use ndarray::{ArrayD, ArrayViewD, Dimension, IxDyn, Slice};
use serde_json::Value;

/// One [`AxisBoundary`] per grid axis.
///
/// # Examples
///
/// ```
/// use gridbc_boundary::GridBoundaries;
/// use gridbc_core::{GridAxis, GridShape};
/// use serde_json::json;
///
/// let grid = GridShape::new(vec![
///     GridAxis::new(8, true).unwrap(),
///     GridAxis::new(4, false).unwrap(),
/// ]).unwrap();
/// let bcs = GridBoundaries::from_value(&grid, &json!(["periodic", {"derivative": 0}])).unwrap();
/// assert!(bcs.axis(0).unwrap().is_periodic());
/// assert!(!bcs.axis(1).unwrap().is_periodic());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridBoundaries {
    grid: GridShape,
    axes: Vec<AxisBoundary>,
}

impl GridBoundaries {
    /// Apply the same specification to every axis.
    pub fn from_spec(grid: &GridShape, spec: &BoundarySpec) -> Result<Self, BoundaryError> {
        let axes = (0..grid.ndim())
            .map(|axis| AxisBoundary::from_spec(grid, axis, spec))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            grid: grid.clone(),
            axes,
        })
    }

    /// One specification per axis, in axis order.
    pub fn from_specs(grid: &GridShape, specs: &[BoundarySpec]) -> Result<Self, BoundaryError> {
        if specs.len() != grid.ndim() {
            return Err(BoundaryError::invalid(format!(
                "got {} boundary specifications for a {}D grid",
                specs.len(),
                grid.ndim()
            )));
        }
        let axes = specs
            .iter()
            .enumerate()
            .map(|(axis, spec)| AxisBoundary::from_spec(grid, axis, spec))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            grid: grid.clone(),
            axes,
        })
    }

    /// Parse a grid-level configuration.
    ///
    /// A sequence with exactly one entry per axis is read per axis; any
    /// other value applies to every axis. On a 2D grid `[a, b]` therefore
    /// means axis 0 gets `a` and axis 1 gets `b`.
    pub fn from_value(grid: &GridShape, value: &Value) -> Result<Self, BoundaryError> {
        let boundaries = match value {
            Value::Array(items) if items.len() == grid.ndim() => {
                let specs = items
                    .iter()
                    .map(BoundarySpec::from_value)
                    .collect::<Result<Vec<_>, _>>()?;
                Self::from_specs(grid, &specs)?
            }
            other => Self::from_spec(grid, &BoundarySpec::from_value(other)?)?,
        };
        log::debug!(
            "built boundaries for {}D grid {:?}",
            grid.ndim(),
            grid.shape()
        );
        Ok(boundaries)
    }

    /// The grid these boundaries were built for.
    pub fn grid(&self) -> &GridShape {
        &self.grid
    }

    /// Boundary of `axis`.
    pub fn axis(&self, axis: usize) -> Result<&AxisBoundary, BoundaryError> {
        self.axes.get(axis).ok_or_else(|| {
            BoundaryError::invalid(format!(
                "axis {axis} does not exist on a {}D grid",
                self.axes.len()
            ))
        })
    }

    /// Boundaries in axis order.
    pub fn iter(&self) -> impl Iterator<Item = &AxisBoundary> {
        self.axes.iter()
    }

    /// Per-axis configuration, one entry per axis.
    pub fn to_value(&self) -> Value {
        Value::Array(self.axes.iter().map(|b| b.to_spec().to_value()).collect())
    }

    /// Set `value` on every bounded axis. Periodic axes are skipped.
    ///
    /// Either every bounded axis is updated or none is.
    pub fn set_value(&mut self, value: BcValue) -> Result<(), BoundaryError> {
        let mut axes = self.axes.clone();
        for b in axes.iter_mut().filter(|b| !b.is_periodic()) {
            b.set_value(value.clone())?;
        }
        self.axes = axes;
        Ok(())
    }

    /// Fill the ghost layer of `full` from its interior.
    ///
    /// `full` must have shape [`GridShape::ghost_shape`]: one extra point
    /// on each side of every axis, with the interior starting at offset 1.
    /// Ghost faces are written for every interior transverse location;
    /// edge and corner points shared by several ghost faces are left as
    /// they are.
    pub fn set_ghost_cells(&self, full: &mut ArrayD<f64>) -> Result<(), BoundaryError> {
        let expected = self.grid.ghost_shape();
        if full.shape() != expected.as_slice() {
            return Err(BoundaryError::invalid(format!(
                "ghost array has shape {:?}, expected {:?}",
                full.shape(),
                expected
            )));
        }
        let shape = self.grid.shape();
        for boundary in &self.axes {
            let axis = boundary.axis();
            let n = shape[axis] as isize;
            let mut writes = Vec::new();
            {
                let interior = full.slice_each_axis(|d| Slice::from(1..d.len - 1));
                let mut face_shape = shape.clone();
                face_shape[axis] = 1;
                for face in ndarray::indices(IxDyn(&face_shape)) {
                    let idx: Vec<isize> = face.slice().iter().map(|&v| v as isize).collect();
                    for (ghost, slot) in [(-1, 0), (n, shape[axis] + 1)] {
                        let at = gridbc_core::index::with_axis(&idx, axis, ghost);
                        let v = boundary.virtual_point(&interior, &at, None)?;
                        let mut pos: Vec<usize> = face.slice().iter().map(|&p| p + 1).collect();
                        pos[axis] = slot;
                        writes.push((pos, v));
                    }
                }
            }
            for (pos, v) in writes {
                full[IxDyn(&pos)] = v;
            }
        }
        log::debug!("filled ghost cells on {} axes", self.axes.len());
        Ok(())
    }

    /// Copy `data` into a fresh ghost-padded array and fill its ghost layer.
    pub fn with_ghost_cells(&self, data: &ArrayD<f64>) -> Result<ArrayD<f64>, BoundaryError> {
        if data.shape() != self.grid.shape().as_slice() {
            return Err(BoundaryError::invalid(format!(
                "data has shape {:?}, expected {:?}",
                data.shape(),
                self.grid.shape()
            )));
        }
        let mut full = ArrayD::zeros(IxDyn(&self.grid.ghost_shape()));
        full.slice_each_axis_mut(|d| Slice::from(1..d.len - 1))
            .assign(data);
        self.set_ghost_cells(&mut full)?;
        Ok(full)
    }

    /// Evaluate the point at `index` through the boundary of `axis`.
    pub fn virtual_point(
        &self,
        data: &ArrayViewD<'_, f64>,
        axis: usize,
        index: &[isize],
        fill: Option<f64>,
    ) -> Result<f64, BoundaryError> {
        if index.len() != self.grid.ndim() {
            return Err(BoundaryError::invalid(format!(
                "index has {} entries for a {}D grid",
                index.len(),
                self.grid.ndim()
            )));
        }
        self.axis(axis)?.virtual_point(data, index, fill)
    }
}
