//! Layout Engine - where every cell goes.
//!
//! Cells are uniform squares on a regular lattice, so layout is a closed-form
//! computation over a [`CellTemplate`] and the grid's column/row counts.
//!
//! # Example
//!
//! ```
//! use spark_matrix::layout::{CellTemplate, GridGeometry};
//! use spark_matrix::types::{Extent, Point};
//!
//! let geometry = GridGeometry::new(CellTemplate::default(), 3, 1);
//! assert_eq!(geometry.extent(), Extent::new(34, 8));
//! assert_eq!(geometry.cell_origin(2, 0), Point::new(26, 0));
//! ```

mod geometry;
mod template;

pub use geometry::{canvas_extent, pitch, GridGeometry};
pub use template::CellTemplate;
