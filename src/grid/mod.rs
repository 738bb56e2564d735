//! Grid Renderer - one element per cell, then only style updates.
//!
//! # Render
//!
//! [`Grid::render`] normalizes the raw matrix, sizes the canvas from the
//! layout engine, and appends one template clone per cell of the active
//! frame in row-major order. Each element's handle is recorded on the cell
//! at the same coordinate in *every* frame, so switching frames reuses the
//! same elements.
//!
//! Normalization is the only step that can fail and it runs first: a failed
//! render leaves the surface untouched.
//!
//! # Refresh
//!
//! [`Grid::refresh`] pushes cell state to the elements of the active frame:
//!
//! - `color: Some(c)` sets the background; `None` leaves it alone
//! - `print` sets opacity to 1.0, otherwise 0.0
//!
//! Geometry is never recomputed by a refresh.

use log::{debug, trace};

use crate::error::{DisplayError, Result, ShapeError};
use crate::layout::{CellTemplate, GridGeometry};
use crate::matrix::{Matrix, RawMatrix};
use crate::surface::{Element, ElementId, Surface};
use crate::types::Point;

/// Binds one raw matrix to one host surface.
#[derive(Debug)]
pub struct Grid<S> {
    surface: S,
    raw: RawMatrix,
    matrix: Option<Matrix>,
    geometry: Option<GridGeometry>,
}

impl<S: Surface> Grid<S> {
    pub fn new(surface: S, raw: RawMatrix) -> Self {
        Self {
            surface,
            raw,
            matrix: None,
            geometry: None,
        }
    }

    // =========================================================================
    // Render
    // =========================================================================

    /// Normalize, lay out and materialize the grid.
    ///
    /// Appends `cols * rows` elements to the surface. Rendering again
    /// re-normalizes from the raw matrix and appends a fresh set, so callers
    /// clear the surface first.
    pub fn render(&mut self, template: CellTemplate) -> std::result::Result<(), ShapeError> {
        let mut matrix = Matrix::normalize(&self.raw)?;
        let (cols, rows) = matrix.dimensions();
        let geometry = GridGeometry::new(template, cols, rows);

        self.surface.set_size(geometry.extent());

        let mut placed = Vec::with_capacity(cols * rows);
        matrix.traverse(matrix.active_frame(), |_, x, y, _| placed.push((x, y)));

        for (x, y) in placed {
            let element = template.instantiate(geometry.cell_origin(x, y));
            let id = self.surface.append(element);
            matrix.for_each_layer(x, y, |cell| cell.attach(id));
        }

        debug!(
            "grid rendered: {cols}x{rows}, {} frame(s), extent {}x{}",
            matrix.frame_count(),
            geometry.extent().width,
            geometry.extent().height
        );

        self.matrix = Some(matrix);
        self.geometry = Some(geometry);
        Ok(())
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    /// Push the active frame's cell state to the surface.
    pub fn refresh(&mut self) -> Result<()> {
        let matrix = self.matrix.as_ref().ok_or(DisplayError::NotInitialized)?;
        let surface = &mut self.surface;
        let mut updated = 0usize;

        matrix.traverse(matrix.active_frame(), |cell, _, _, _| {
            let Some(id) = cell.element() else {
                return;
            };
            if let Some(color) = cell.color {
                surface.set_background(id, color);
            }
            let opacity = if cell.print {
                Element::OPAQUE
            } else {
                Element::HIDDEN
            };
            surface.set_opacity(id, opacity);
            updated += 1;
        });

        trace!("grid refreshed frame {}: {updated} element(s)", matrix.active_frame());
        Ok(())
    }

    /// Remove every element from the surface and forget the handles.
    ///
    /// The normalized matrix and geometry are kept.
    pub fn clear(&mut self) {
        self.surface.clear();
        if let Some(matrix) = self.matrix.as_mut() {
            for frame in 0..matrix.frame_count() {
                matrix.traverse_mut(frame, |cell, _, _, _| cell.detach());
            }
        }
        debug!("grid cleared");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn is_rendered(&self) -> bool {
        self.matrix.is_some()
    }

    pub fn raw(&self) -> &RawMatrix {
        &self.raw
    }

    /// The normalized matrix, once rendered.
    pub fn matrix(&self) -> Option<&Matrix> {
        self.matrix.as_ref()
    }

    pub fn matrix_mut(&mut self) -> Option<&mut Matrix> {
        self.matrix.as_mut()
    }

    pub fn geometry(&self) -> Option<&GridGeometry> {
        self.geometry.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Cell under a canvas point.
    pub fn cell_at(&self, point: Point) -> Option<(usize, usize)> {
        self.geometry.as_ref()?.hit_test(point)
    }

    /// Element rendered for cell `(x, y)`.
    pub fn element_at(&self, x: usize, y: usize) -> Option<ElementId> {
        self.matrix.as_ref()?.cell(x, y)?.element()
    }
}

// =============================================================================
// TESTS
// =============================================================================
