#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Kornia Rectangle Mapping
//!
//! Given the four corners of the same rectangle expressed in two different
//! 2D coordinate grids, this crate builds the affine transform that maps any
//! point of the first grid into the second one, and back. The rectangles may
//! be rotated, scaled, reflected and translated with respect to each other.
//!
//! Each rectangle is decomposed into a translation, a rotation, a scale and a
//! reflection that place the canonical unit square onto it. The forward
//! transform goes out of the first rectangle into the unit square and then
//! into the second rectangle.
//!
//! ## Example
//!
//! ```rust
//! use kornia_rectmap::{Point2, Rectangle, RectangleTransformer};
//!
//! let grid1 = Rectangle::from([(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]);
//! let grid2 = Rectangle::from([(205.0, -55.0), (385.0, -55.0), (205.0, 160.0), (385.0, 160.0)]);
//!
//! let transformer = RectangleTransformer::new(grid1, grid2);
//! let p = transformer.transform_from_grid1_to_grid2(Point2::new(1.0, 1.0));
//! let q = transformer.transform_from_grid2_to_grid1(p);
//! ```

/// Error types for the rectmap module.
pub mod error;

/// Homogeneous matrix builders for the rectangle frames.
pub mod matrix;

/// Point and rectangle types.
pub mod point;

/// Mapping between two rectangles.
pub mod transformer;

/// Optional checks on the rectangle corners.
pub mod validation;

pub use error::RectMapError;
pub use point::{Point2, Rectangle};
pub use transformer::RectangleTransformer;
pub use validation::ValidationConfig;
