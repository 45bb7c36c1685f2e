//! Boundary-condition evaluation for structured finite-difference grids.
//!
//! Finite-difference stencils near the edge of a grid need values just
//! outside it. This crate computes those virtual (ghost) points for one
//! axis at a time, either by wrapping around a periodic axis or by applying
//! a pair of lower/upper [`BoundaryCondition`]s on a bounded axis.
//!
//! # Evaluation forms
//!
//! Every condition can be evaluated two ways:
//!
//! - directly against a data array ([`BoundaryCondition::virtual_point`]),
//!   which is what a time-stepping loop needs;
//! - as a [`SparseRow`] of coefficients ([`BoundaryCondition::coefficients`]),
//!   which lets callers fold the boundary into a linear operator.
//!
//! # Configuration
//!
//! [`BoundarySpec`] is the closed set of accepted configuration shapes
//! (`"periodic"`, a single condition, `{"low", "high"}`, `[low, high]`).
//! It round-trips through JSON via `serde`.
//!
//! ```
//! use gridbc_boundary::AxisBoundary;
//! use gridbc_core::GridShape;
//! use ndarray::array;
//!
//! let grid = GridShape::line(5, true).unwrap();
//! let boundary = AxisBoundary::from_value(&grid, 0, &"periodic".into()).unwrap();
//! let data = array![10.0, 20.0, 30.0, 40.0, 50.0].into_dyn();
//! let view = data.view();
//! assert_eq!(boundary.virtual_point(&view, &[-1], None).unwrap(), 50.0);
//! assert_eq!(boundary.region(&view, &[0], None).unwrap(), (50.0, 10.0, 20.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod condition;
pub(crate) mod data;
pub mod grid;
pub mod operator;
pub mod pair;
pub mod periodic;
pub mod sparse;
pub mod spec;
pub mod value;

#[cfg(test)]
pub(crate) mod compliance;

pub use axis::AxisBoundary;
pub use condition::{BoundaryCondition, ConditionRule};
pub use grid::GridBoundaries;
pub use operator::LinearOperator;
pub use pair::BoundaryPair;
pub use periodic::PeriodicBoundary;
pub use sparse::SparseRow;
pub use spec::{AutoFallback, BoundarySpec};
pub use value::BcValue;
