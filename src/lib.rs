//! # spark-matrix
//!
//! Dot-matrix display for Rust: a grid of uniformly sized cells, each
//! independently colored and switched on or off, driven by a declarative
//! matrix of values, with per-cell pointer interaction.
//!
//! ## Architecture
//!
//! ```text
//! RawMatrix → Matrix::normalize → GridGeometry → Grid::render → Surface
//!                                                    │
//!                         Display::dispatch ← host pointer events
//! ```
//!
//! The crate never draws pixels itself. A [`Surface`](surface::Surface) is
//! told the canvas size, receives one element per cell, and afterwards only
//! background and opacity updates.
//!
//! ## Modules
//!
//! - [`types`] - Colors, points and extents
//! - [`matrix`] - Raw input, cells, frames, traversal
//! - [`layout`] - Cell template and grid geometry
//! - [`surface`] - Host surfaces (memory, terminal)
//! - [`interaction`] - Pointer events, handlers, verdicts
//! - [`grid`] - Grid renderer
//! - [`display`] - Configuration and lifecycle
//! - [`error`] - Error types

pub mod display;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod layout;
pub mod matrix;
pub mod surface;
pub mod types;

// Re-export commonly used items
pub use types::{Extent, Point, Rgba};

pub use error::{DisplayError, Result, ShapeError};

pub use matrix::{Cell, Frame, Matrix, RawCell, RawFrame, RawMatrix};

pub use layout::{CellTemplate, GridGeometry};

pub use surface::{CanvasSource, Element, ElementId, MemorySurface, Surface, TerminalSurface};

pub use interaction::{EventHandlers, PointerEvent, PointerKind, PointerTarget, Suppress, Verdict};

pub use grid::Grid;

pub use display::{configure, Display, DisplayConfig, DisplayOptions};
