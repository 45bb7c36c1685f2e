//! Single-sided boundary conditions.
//!
//! A [`BoundaryCondition`] is scoped to exactly one (axis, side) pair and
//! describes how the virtual point just beyond that side is obtained from
//! the interior. All rules use the axis spacing `dx`, the boundary point
//! `b` (`0` or `size - 1`) and its inward neighbour `n` (`1` or `size - 2`).

use crate::data;
use crate::sparse::SparseRow;
use crate::value::{self, BcValue};
use gridbc_core::{BoundaryError, GridShape, Side};
use ndarray::ArrayViewD;
use std::fmt;

/// How the virtual point beyond one side of an axis is computed.
#[derive(Clone, Debug, PartialEq)]
pub enum ConditionRule {
    /// Fixed value: `virtual = value`, independent of the interior.
    Value(BcValue),
    /// Fixed outward normal derivative: `virtual = data[b] + dx * value`.
    ///
    /// A zero derivative mirrors the boundary point (no-flux).
    Derivative(BcValue),
    /// Linear extrapolation of the two nearest points:
    /// `virtual = 2 * data[b] - data[n]`.
    Extrapolate,
    /// Robin condition `∂c/∂n + value * c = constant`:
    /// `virtual = data[b] + dx * (constant - value * data[b])`.
    Mixed {
        /// Coefficient of the field value.
        value: BcValue,
        /// Right-hand side.
        constant: BcValue,
    },
    /// Fixed second derivative: `virtual = dx² * value + 2 * data[b] - data[n]`.
    Curvature(BcValue),
}

impl ConditionRule {
    /// Every accepted rule identifier, aliases included.
    pub const SUPPORTED: &'static [&'static str] = &[
        "value",
        "dirichlet",
        "derivative",
        "neumann",
        "extrapolate",
        "mixed",
        "robin",
        "curvature",
    ];

    /// Canonical identifier used when serializing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Value(_) => "value",
            Self::Derivative(_) => "derivative",
            Self::Extrapolate => "extrapolate",
            Self::Mixed { .. } => "mixed",
            Self::Curvature(_) => "curvature",
        }
    }

    /// Build a rule from its identifier and parameters. Missing parameters
    /// default to zero.
    pub fn from_name(
        name: &str,
        value: Option<BcValue>,
        constant: Option<BcValue>,
    ) -> Result<Self, BoundaryError> {
        let value = value.unwrap_or(BcValue::Scalar(0.0));
        let constant = constant.unwrap_or(BcValue::Scalar(0.0));
        match name {
            "value" | "dirichlet" => Ok(Self::Value(value)),
            "derivative" | "neumann" => Ok(Self::Derivative(value)),
            "extrapolate" => Ok(Self::Extrapolate),
            "mixed" | "robin" => Ok(Self::Mixed { value, constant }),
            "curvature" => Ok(Self::Curvature(value)),
            other => Err(BoundaryError::invalid(format!(
                "unsupported boundary condition type '{other}'; supported: {}",
                Self::SUPPORTED.join(", ")
            ))),
        }
    }

    /// Whether the rule carries a main `value` parameter.
    pub fn has_value(&self) -> bool {
        !matches!(self, Self::Extrapolate)
    }

    /// Whether the rule reads the point one step inward from the boundary.
    pub fn needs_neighbour(&self) -> bool {
        matches!(self, Self::Extrapolate | Self::Curvature(_))
    }

    fn params(&self) -> impl Iterator<Item = &BcValue> {
        let (a, b) = match self {
            Self::Value(v) | Self::Derivative(v) | Self::Curvature(v) => (Some(v), None),
            Self::Extrapolate => (None, None),
            Self::Mixed { value, constant } => (Some(value), Some(constant)),
        };
        a.into_iter().chain(b)
    }
}

/// A boundary rule bound to one side of one grid axis.
///
/// # Examples
///
/// ```
/// use gridbc_boundary::{BoundaryCondition, ConditionRule};
/// use gridbc_core::{GridShape, Side};
/// use ndarray::array;
///
/// let grid = GridShape::line(4, false).unwrap();
/// let bc = BoundaryCondition::new(&grid, 0, Side::Lower, ConditionRule::Extrapolate).unwrap();
/// let data = array![1.0, 3.0, 4.0, 4.5].into_dyn();
/// assert_eq!(bc.virtual_point(&data.view(), &[]).unwrap(), -1.0);
///
/// let row = bc.coefficients(&[]).unwrap();
/// assert_eq!(row.weight(0), 2.0);
/// assert_eq!(row.weight(1), -1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryCondition {
    axis: usize,
    side: Side,
    size: usize,
    spacing: f64,
    periodic: bool,
    transverse_shape: Vec<usize>,
    rule: ConditionRule,
}

impl BoundaryCondition {
    /// Bind `rule` to `side` of `axis` on `grid`.
    ///
    /// Fails with `InvalidConfiguration` if the axis does not exist, a value
    /// array does not match the boundary face, or the rule needs an inward
    /// neighbour on an axis with a single point.
    pub fn new(
        grid: &GridShape,
        axis: usize,
        side: Side,
        rule: ConditionRule,
    ) -> Result<Self, BoundaryError> {
        let grid_axis = grid.axis(axis)?;
        let transverse_shape = grid.transverse_shape(axis);
        for param in rule.params() {
            param.validate(&transverse_shape)?;
        }
        if rule.needs_neighbour() && grid_axis.size() < 2 {
            return Err(BoundaryError::invalid(format!(
                "'{}' condition on axis {axis} needs at least 2 points, axis has {}",
                rule.name(),
                grid_axis.size()
            )));
        }
        Ok(Self {
            axis,
            side,
            size: grid_axis.size(),
            spacing: grid_axis.spacing(),
            periodic: grid_axis.is_periodic(),
            transverse_shape,
            rule,
        })
    }

    pub(crate) fn transverse_shape(&self) -> &[usize] {
        &self.transverse_shape
    }

    /// Axis this condition applies to.
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// Side of the axis this condition applies to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// `true` for conditions on the upper side.
    pub fn is_upper(&self) -> bool {
        self.side.is_upper()
    }

    /// Number of points along the axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the underlying axis is periodic.
    pub fn is_periodic_axis(&self) -> bool {
        self.periodic
    }

    /// The rule and its parameters.
    pub fn rule(&self) -> &ConditionRule {
        &self.rule
    }

    /// Index of the real point adjacent to the boundary.
    pub fn boundary_index(&self) -> isize {
        match self.side {
            Side::Lower => 0,
            Side::Upper => self.size as isize - 1,
        }
    }

    /// Index of the virtual point this condition defines.
    pub fn ghost_index(&self) -> isize {
        match self.side {
            Side::Lower => -1,
            Side::Upper => self.size as isize,
        }
    }

    fn neighbour_index(&self) -> isize {
        match self.side {
            Side::Lower => 1,
            Side::Upper => self.size as isize - 2,
        }
    }

    /// Evaluate the virtual point directly from `data`.
    ///
    /// `transverse` is the location on the boundary face: the full point
    /// index with the entry for this condition's axis removed.
    pub fn virtual_point(
        &self,
        data: &ArrayViewD<'_, f64>,
        transverse: &[isize],
    ) -> Result<f64, BoundaryError> {
        value::check_transverse(self.axis, transverse, &self.transverse_shape)?;
        let read = |i: isize| data::read_point(data, &data::insert_axis(transverse, self.axis, i));
        let dx = self.spacing;
        match &self.rule {
            ConditionRule::Value(v) => v.at(self.axis, transverse),
            ConditionRule::Derivative(v) => {
                Ok(read(self.boundary_index())? + dx * v.at(self.axis, transverse)?)
            }
            ConditionRule::Extrapolate => {
                Ok(2.0 * read(self.boundary_index())? - read(self.neighbour_index())?)
            }
            ConditionRule::Mixed { value, constant } => {
                let b = read(self.boundary_index())?;
                let gamma = value.at(self.axis, transverse)?;
                let beta = constant.at(self.axis, transverse)?;
                Ok(b + dx * (beta - gamma * b))
            }
            ConditionRule::Curvature(v) => {
                let b = read(self.boundary_index())?;
                let n = read(self.neighbour_index())?;
                Ok(dx * dx * v.at(self.axis, transverse)? + 2.0 * b - n)
            }
        }
    }

    /// The virtual point as a sparse combination of real points along the
    /// axis, at boundary-face location `transverse`.
    pub fn coefficients(&self, transverse: &[isize]) -> Result<SparseRow, BoundaryError> {
        value::check_transverse(self.axis, transverse, &self.transverse_shape)?;
        let dx = self.spacing;
        let b = self.boundary_index();
        let row = match &self.rule {
            ConditionRule::Value(v) => SparseRow::constant(v.at(self.axis, transverse)?),
            ConditionRule::Derivative(v) => {
                SparseRow::constant(dx * v.at(self.axis, transverse)?).with_weight(b, 1.0)
            }
            ConditionRule::Extrapolate => SparseRow::constant(0.0)
                .with_weight(b, 2.0)
                .with_weight(self.neighbour_index(), -1.0),
            ConditionRule::Mixed { value, constant } => {
                let gamma = value.at(self.axis, transverse)?;
                let beta = constant.at(self.axis, transverse)?;
                SparseRow::constant(dx * beta).with_weight(b, 1.0 - dx * gamma)
            }
            ConditionRule::Curvature(v) => {
                SparseRow::constant(dx * dx * v.at(self.axis, transverse)?)
                    .with_weight(b, 2.0)
                    .with_weight(self.neighbour_index(), -1.0)
            }
        };
        Ok(row)
    }

    /// Replace the main parameter of the rule.
    ///
    /// For [`ConditionRule::Mixed`] this is the coefficient of the field
    /// value; the constant is kept. Fails for rules without a parameter.
    pub fn set_value(&mut self, new: BcValue) -> Result<(), BoundaryError> {
        new.validate(&self.transverse_shape)?;
        match &mut self.rule {
            ConditionRule::Value(v)
            | ConditionRule::Derivative(v)
            | ConditionRule::Curvature(v)
            | ConditionRule::Mixed { value: v, .. } => {
                *v = new;
                Ok(())
            }
            ConditionRule::Extrapolate => Err(BoundaryError::invalid(format!(
                "'extrapolate' condition on {} side of axis {} has no value to set",
                self.side, self.axis
            ))),
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule {
            ConditionRule::Value(v) => write!(f, "c = {v}")?,
            ConditionRule::Derivative(v) => write!(f, "dc/dn = {v}")?,
            ConditionRule::Extrapolate => write!(f, "d2c/dn2 = 0")?,
            ConditionRule::Mixed { value, constant } => {
                write!(f, "dc/dn + {value} * c = {constant}")?
            }
            ConditionRule::Curvature(v) => write!(f, "d2c/dn2 = {v}")?,
        }
        write!(f, " @ {} x{}", self.side, self.axis)
    }
}
