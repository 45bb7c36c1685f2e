//! Core types for the gridbc boundary-condition evaluator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! structured-grid description (axes, spacing, periodicity), the
//! multi-dimensional [`Index`] type used to address real and virtual points,
//! and the [`BoundaryError`] taxonomy shared by every other crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod index;

pub use axis::{GridAxis, GridShape, Side};
pub use error::BoundaryError;
pub use index::Index;
