//! Per-axis boundary dispatch.

use crate::condition::{BoundaryCondition, ConditionRule};
use crate::pair::BoundaryPair;
use crate::periodic::PeriodicBoundary;
use crate::sparse::SparseRow;
use crate::spec::{AutoFallback, BoundarySpec};
use crate::value::BcValue;
use gridbc_core::{BoundaryError, GridShape, Side};
use ndarray::ArrayViewD;
use serde_json::Value;

/// The boundary treatment of one grid axis.
///
/// The variant is fixed at construction: a periodic axis wraps, a bounded
/// axis delegates to a lower/upper [`BoundaryPair`]. All evaluators take
/// `&self` and an optional `fill` for queries more than one step outside
/// the axis.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisBoundary {
    /// Wraparound (optionally sign-flipping) axis.
    Periodic(PeriodicBoundary),
    /// Bounded axis with explicit lower and upper conditions.
    Paired(BoundaryPair),
}

impl AxisBoundary {
    /// Build the boundary for `axis` of `grid` from a parsed specification.
    pub fn from_spec(grid: &GridShape, axis: usize, spec: &BoundarySpec) -> Result<Self, BoundaryError> {
        let periodic_axis = grid.axis(axis)?.is_periodic();
        let boundary = match spec {
            BoundarySpec::Periodic { flip_sign } => {
                Self::Periodic(PeriodicBoundary::new(grid, axis, *flip_sign)?)
            }
            BoundarySpec::AutoPeriodic(_) if periodic_axis => {
                Self::Periodic(PeriodicBoundary::new(grid, axis, false)?)
            }
            BoundarySpec::AutoPeriodic(fallback) => {
                let rule = match fallback {
                    AutoFallback::Neumann => ConditionRule::Derivative(0.0.into()),
                    AutoFallback::Dirichlet => ConditionRule::Value(0.0.into()),
                };
                Self::paired(grid, axis, rule.clone(), rule)?
            }
            BoundarySpec::Both(rule) => Self::paired(grid, axis, rule.clone(), rule.clone())?,
            BoundarySpec::Pair { low, high } => {
                Self::paired(grid, axis, low.clone(), high.clone())?
            }
        };
        log::debug!("axis {axis}: built {} boundary", boundary.kind());
        Ok(boundary)
    }

    /// Parse `value` as a [`BoundarySpec`] and build the boundary.
    pub fn from_value(grid: &GridShape, axis: usize, value: &Value) -> Result<Self, BoundaryError> {
        Self::from_spec(grid, axis, &BoundarySpec::from_value(value)?)
    }

    fn paired(
        grid: &GridShape,
        axis: usize,
        low: ConditionRule,
        high: ConditionRule,
    ) -> Result<Self, BoundaryError> {
        if grid.axis(axis)?.is_periodic() {
            return Err(BoundaryError::invalid(format!(
                "axis {axis} is periodic; use \"periodic\" or \"anti-periodic\" instead of \
                 '{}'/'{}' conditions",
                low.name(),
                high.name()
            )));
        }
        Ok(Self::Paired(BoundaryPair::new(
            BoundaryCondition::new(grid, axis, Side::Lower, low)?,
            BoundaryCondition::new(grid, axis, Side::Upper, high)?,
        )?))
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Periodic(p) if p.flip_sign() => "anti-periodic",
            Self::Periodic(_) => "periodic",
            Self::Paired(_) => "paired",
        }
    }

    /// Axis this boundary applies to.
    pub fn axis(&self) -> usize {
        match self {
            Self::Periodic(p) => p.axis(),
            Self::Paired(p) => p.axis(),
        }
    }

    /// Number of points along the axis.
    pub fn size(&self) -> usize {
        match self {
            Self::Periodic(p) => p.size(),
            Self::Paired(p) => p.size(),
        }
    }

    /// `true` for the periodic variant.
    pub fn is_periodic(&self) -> bool {
        matches!(self, Self::Periodic(_))
    }

    /// Value at `index` (real or virtual). See
    /// [`PeriodicBoundary::virtual_point`] and [`BoundaryPair::virtual_point`].
    pub fn virtual_point(
        &self,
        data: &ArrayViewD<'_, f64>,
        index: &[isize],
        fill: Option<f64>,
    ) -> Result<f64, BoundaryError> {
        match self {
            Self::Periodic(p) => p.virtual_point(data, index, fill),
            Self::Paired(p) => p.virtual_point(data, index, fill),
        }
    }

    /// `(left, center, right)` around `index` along this axis.
    pub fn region(
        &self,
        data: &ArrayViewD<'_, f64>,
        index: &[isize],
        fill: Option<f64>,
    ) -> Result<(f64, f64, f64), BoundaryError> {
        match self {
            Self::Periodic(p) => p.region(data, index, fill),
            Self::Paired(p) => p.region(data, index, fill),
        }
    }

    /// Sparse coefficient form of [`virtual_point`](Self::virtual_point).
    pub fn coefficients(&self, index: &[isize], fill: Option<f64>) -> Result<SparseRow, BoundaryError> {
        match self {
            Self::Periodic(p) => p.coefficients(index, fill),
            Self::Paired(p) => p.coefficients(index, fill),
        }
    }

    /// Set the value of both conditions of a bounded axis.
    ///
    /// Periodic axes carry no value and return `InvalidConfiguration`.
    pub fn set_value(&mut self, value: BcValue) -> Result<(), BoundaryError> {
        match self {
            Self::Periodic(p) => Err(BoundaryError::invalid(format!(
                "axis {} is periodic and has no boundary value",
                p.axis()
            ))),
            Self::Paired(p) => p.set_value(value),
        }
    }

    /// The configuration this boundary was built from, in canonical form.
    ///
    /// A pair whose sides share one rule collapses to a single condition.
    pub fn to_spec(&self) -> BoundarySpec {
        match self {
            Self::Periodic(p) => BoundarySpec::Periodic {
                flip_sign: p.flip_sign(),
            },
            Self::Paired(p) if p.low().rule() == p.high().rule() => {
                BoundarySpec::Both(p.low().rule().clone())
            }
            Self::Paired(p) => BoundarySpec::Pair {
                low: p.low().rule().clone(),
                high: p.high().rule().clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use gridbc_core::GridAxis;
    use ndarray::{array, ArrayD};
    use serde_json::json;

    fn bounded(size: usize) -> GridShape {
        GridShape::line(size, false).unwrap()
    }

    fn ring(size: usize) -> GridShape {
        GridShape::line(size, true).unwrap()
    }

    #[test]
    fn periodic_string_on_periodic_axis() {
        let b = AxisBoundary::from_value(&ring(5), 0, &json!("periodic")).unwrap();
        assert!(b.is_periodic());
        assert_eq!(b.size(), 5);
    }

    #[test]
    fn periodic_on_bounded_axis_rejected() {
        let err = AxisBoundary::from_value(&bounded(5), 0, &json!("periodic")).unwrap_err();
        assert!(err.to_string().contains("non-periodic axis 0"), "{err}");
    }

    #[test]
    fn conditions_on_periodic_axis_rejected() {
        let err = AxisBoundary::from_value(&ring(5), 0, &json!("neumann")).unwrap_err();
        assert!(err.to_string().contains("periodic"), "{err}");
    }

    #[test]
    fn auto_periodic_follows_axis() {
        let spec = json!("auto_periodic_neumann");
        assert!(AxisBoundary::from_value(&ring(4), 0, &spec).unwrap().is_periodic());
        let b = AxisBoundary::from_value(&bounded(4), 0, &spec).unwrap();
        let data = array![1.0, 2.0, 3.0, 4.0].into_dyn();
        assert_eq!(b.region(&data.view(), &[0], None).unwrap(), (1.0, 1.0, 2.0));

        let b = AxisBoundary::from_value(&bounded(4), 0, &json!("auto_periodic_dirichlet")).unwrap();
        assert_eq!(b.virtual_point(&data.view(), &[4], None).unwrap(), 0.0);
    }

    #[test]
    fn set_value_on_periodic_rejected() {
        let mut b = AxisBoundary::from_value(&ring(3), 0, &json!("periodic")).unwrap();
        assert!(b.set_value(1.0.into()).is_err());
    }

    #[test]
    fn set_value_on_paired() {
        let mut b = AxisBoundary::from_value(&bounded(3), 0, &json!("dirichlet")).unwrap();
        b.set_value(3.0.into()).unwrap();
        let data = array![0.0, 0.0, 0.0].into_dyn();
        assert_eq!(b.virtual_point(&data.view(), &[-1], None).unwrap(), 3.0);
        assert_eq!(b.virtual_point(&data.view(), &[3], None).unwrap(), 3.0);
    }

    #[test]
    fn to_spec_collapses_equal_sides() {
        let b = AxisBoundary::from_value(&bounded(3), 0, &json!(["extrapolate", "extrapolate"]))
            .unwrap();
        assert_eq!(b.to_spec(), BoundarySpec::Both(ConditionRule::Extrapolate));

        let b = AxisBoundary::from_value(&bounded(3), 0, &json!({"low": "extrapolate", "high": {"value": 1}}))
            .unwrap();
        assert!(matches!(b.to_spec(), BoundarySpec::Pair { .. }));
    }

    #[test]
    fn axis_out_of_range_rejected() {
        assert!(AxisBoundary::from_value(&bounded(3), 2, &json!("dirichlet")).is_err());
    }

    #[test]
    fn compliance_on_third_axis_of_3d_grid() {
        let grid = GridShape::new(vec![
            GridAxis::new(2, false).unwrap(),
            GridAxis::new(2, true).unwrap(),
            GridAxis::new(5, false).unwrap(),
        ])
        .unwrap();
        let b = AxisBoundary::from_value(&grid, 2, &json!({"low": "extrapolate", "high": {"derivative": 0.5}}))
            .unwrap();
        let data = ArrayD::from_shape_fn(vec![2, 2, 5], |ix| {
            (ix[0] * 100 + ix[1] * 10 + ix[2]) as f64
        });
        compliance::run_full_compliance(&b, &data);
    }
}
