//! Structured grid axes and shapes.

use crate::error::BoundaryError;
use std::fmt;

/// Which end of an axis a boundary condition applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The side below index `0`.
    Lower,
    /// The side above index `size - 1`.
    Upper,
}

impl Side {
    /// `true` for [`Side::Upper`].
    pub fn is_upper(self) -> bool {
        matches!(self, Self::Upper)
    }

    /// The other side of the same axis.
    pub fn opposite(self) -> Self {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => write!(f, "lower"),
            Self::Upper => write!(f, "upper"),
        }
    }
}

/// One integer-indexed dimension of a structured grid.
///
/// Points along the axis are `0..size`, separated by `spacing`. The axis is
/// either periodic (its two ends are identified) or bounded. Immutable once
/// constructed.
///
/// # Examples
///
/// ```
/// use gridbc_core::GridAxis;
///
/// let x = GridAxis::new(32, false).unwrap().with_spacing(0.1).unwrap();
/// assert_eq!(x.size(), 32);
/// assert!(!x.is_periodic());
/// assert_eq!(x.spacing(), 0.1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridAxis {
    size: usize,
    periodic: bool,
    spacing: f64,
}

impl GridAxis {
    /// Maximum number of points: indices are `isize`, so `size` must fit
    /// with one step of headroom for the upper virtual point.
    pub const MAX_SIZE: usize = (isize::MAX - 1) as usize;

    /// Create an axis with `size` points and unit spacing.
    ///
    /// Returns `Err(InvalidConfiguration)` if `size == 0` or `size` exceeds
    /// [`Self::MAX_SIZE`].
    pub fn new(size: usize, periodic: bool) -> Result<Self, BoundaryError> {
        if size == 0 {
            return Err(BoundaryError::invalid("axis must have at least one point"));
        }
        if size > Self::MAX_SIZE {
            return Err(BoundaryError::invalid(format!(
                "axis size {size} exceeds maximum {}",
                Self::MAX_SIZE
            )));
        }
        Ok(Self {
            size,
            periodic,
            spacing: 1.0,
        })
    }

    /// Replace the grid spacing. Must be finite and strictly positive.
    pub fn with_spacing(self, spacing: f64) -> Result<Self, BoundaryError> {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(BoundaryError::invalid(format!(
                "axis spacing must be finite and positive, got {spacing}"
            )));
        }
        Ok(Self { spacing, ..self })
    }

    /// Number of points.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the two ends of the axis are identified.
    pub fn is_periodic(&self) -> bool {
        self.periodic
    }

    /// Distance between neighbouring points.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Index of the last real point adjacent to `side`.
    pub fn boundary_index(&self, side: Side) -> isize {
        match side {
            Side::Lower => 0,
            Side::Upper => self.size as isize - 1,
        }
    }

    /// Index of the virtual point just beyond `side` (`-1` or `size`).
    pub fn ghost_index(&self, side: Side) -> isize {
        match side {
            Side::Lower => -1,
            Side::Upper => self.size as isize,
        }
    }
}

/// An ordered list of axes describing a structured grid.
///
/// # Examples
///
/// ```
/// use gridbc_core::{GridAxis, GridShape};
///
/// let grid = GridShape::new(vec![
///     GridAxis::new(4, true).unwrap(),
///     GridAxis::new(3, false).unwrap(),
/// ]).unwrap();
/// assert_eq!(grid.shape(), vec![4, 3]);
/// assert_eq!(grid.transverse_shape(0), vec![3]);
/// assert_eq!(grid.ghost_shape(), vec![6, 5]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridShape {
    axes: Vec<GridAxis>,
}

impl GridShape {
    /// Create a grid from its axes. At least one axis is required.
    pub fn new(axes: Vec<GridAxis>) -> Result<Self, BoundaryError> {
        if axes.is_empty() {
            return Err(BoundaryError::invalid("grid must have at least one axis"));
        }
        Ok(Self { axes })
    }

    /// A 1D grid with a single axis.
    pub fn line(size: usize, periodic: bool) -> Result<Self, BoundaryError> {
        Self::new(vec![GridAxis::new(size, periodic)?])
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// All axes in order.
    pub fn axes(&self) -> &[GridAxis] {
        &self.axes
    }

    /// The axis at position `axis`, or `InvalidConfiguration` if there is
    /// no such axis.
    pub fn axis(&self, axis: usize) -> Result<&GridAxis, BoundaryError> {
        self.axes.get(axis).ok_or_else(|| {
            BoundaryError::invalid(format!(
                "axis {axis} does not exist on a {}D grid",
                self.axes.len()
            ))
        })
    }

    /// Point counts per axis.
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(GridAxis::size).collect()
    }

    /// Total number of real points.
    pub fn cell_count(&self) -> usize {
        self.axes.iter().map(GridAxis::size).product()
    }

    /// The shape with `axis` removed: the shape of a boundary face.
    pub fn transverse_shape(&self, axis: usize) -> Vec<usize> {
        self.axes
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != axis)
            .map(|(_, a)| a.size())
            .collect()
    }

    /// The shape of an array carrying one ghost layer on every side.
    pub fn ghost_shape(&self) -> Vec<usize> {
        self.axes.iter().map(|a| a.size() + 2).collect()
    }
}
