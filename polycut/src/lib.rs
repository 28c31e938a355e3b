//! Geometric engine for nesting irregular polygonal pieces onto rectangular frames.
//!
//! Feasibility of a placement is decided with No-Fit Polygons (NFP), derived from
//! (approximate) Minkowski sums and polygon boolean operations.

/// Geometric primitives, pieces and regions
pub mod geometry;

/// Frames, placements, instances and solutions
pub mod entities;

/// No-Fit Polygon computation
pub mod nfp;

/// Resolution of feasible anchor points for a piece in a frame
pub mod feasibility;

/// Importing and exporting instances and solutions
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::NestError;
