//! Cell - the normalized state of one grid position.

use super::raw::RawCell;
use crate::surface::ElementId;
use crate::types::Rgba;

/// One grid position's render state.
///
/// Coordinates are fixed at normalization time and only readable afterwards;
/// `print` and `color` are free to change between refreshes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    /// Whether the cell is visually on.
    pub print: bool,
    /// Explicit fill; `None` keeps the template's styling.
    pub color: Option<Rgba>,
    element: Option<ElementId>,
}

impl Cell {
    /// Normalize a raw slot found at column `x`, row `y`.
    pub(crate) fn normalize(raw: RawCell, x: usize, y: usize) -> Self {
        let color = match raw {
            RawCell::LitWithColor(color) => Some(color),
            RawCell::Blank | RawCell::Lit => None,
        };
        Self {
            x,
            y,
            print: raw.is_lit(),
            color,
            element: None,
        }
    }

    /// Column index.
    #[inline]
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row index.
    #[inline]
    pub fn y(&self) -> usize {
        self.y
    }

    /// `(x, y)`.
    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Handle of the visual element rendered for this cell, once rendered.
    #[inline]
    pub fn element(&self) -> Option<ElementId> {
        self.element
    }

    pub(crate) fn attach(&mut self, element: ElementId) {
        self.element = Some(element);
    }

    pub(crate) fn detach(&mut self) {
        self.element = None;
    }

    /// Flip `print`.
    pub fn toggle(&mut self) {
        self.print = !self.print;
    }
}
