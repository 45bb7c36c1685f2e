//! gridbc: boundary-condition evaluation for structured finite-difference
//! grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the gridbc sub-crates and adds file-based configuration loading. For
//! most users, adding `gridbc` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridbc::prelude::*;
//! use ndarray::array;
//!
//! let config = BoundaryConfig::from_json_str(r#"{
//!     "grid": {"axes": [{"size": 4}]},
//!     "boundaries": {"value": 0}
//! }"#).unwrap();
//! let (_grid, bcs) = config.build().unwrap();
//!
//! let data = array![1.0, 2.0, 3.0, 4.0].into_dyn();
//! let x = bcs.axis(0).unwrap();
//! assert_eq!(x.virtual_point(&data.view(), &[-1], None).unwrap(), 0.0);
//! assert_eq!(x.virtual_point(&data.view(), &[4], None).unwrap(), 0.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridbc-core` | Grid axes and shapes, indices, `BoundaryError` |
//! | [`boundary`] | `gridbc-boundary` | Conditions, axis boundaries, specs, ghost cells, operators |
//! | [`config`] | this crate | JSON configuration files |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid description and error types (`gridbc-core`).
///
/// [`types::GridAxis`] and [`types::GridShape`] describe the grid;
/// [`types::BoundaryError`] is returned by every evaluator.
pub use gridbc_core as types;

/// Boundary conditions and their evaluation (`gridbc-boundary`).
///
/// [`boundary::AxisBoundary`] handles one axis,
/// [`boundary::GridBoundaries`] the whole grid.
pub use gridbc_boundary as boundary;

pub mod config;

/// Common imports for typical gridbc usage.
///
/// ```rust
/// use gridbc::prelude::*;
/// ```
pub mod prelude {
    // Grid
    pub use gridbc_core::{BoundaryError, GridAxis, GridShape, Side};

    // Boundaries
    pub use gridbc_boundary::{
        AxisBoundary, BcValue, BoundaryCondition, BoundarySpec, ConditionRule, GridBoundaries,
        LinearOperator, SparseRow,
    };

    // Configuration
    pub use crate::config::{BoundaryConfig, ConfigError};
}
