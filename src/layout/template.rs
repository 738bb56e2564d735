//! CellTemplate - the styling every rendered cell is cloned from.

use crate::surface::Element;
use crate::types::{Point, Rgba};

/// Box styling for one cell, before positioning.
///
/// `margin` is not applied to elements: the layout engine turns it into the
/// gap between neighbouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellTemplate {
    /// Content width and height in pixels.
    pub size: u32,
    pub border_width: u32,
    pub margin: u32,
    pub background: Rgba,
    pub border_color: Rgba,
}

impl CellTemplate {
    /// Fill used by the default template.
    pub const DEFAULT_BACKGROUND: Rgba = Rgba::rgb(123, 108, 255);

    pub fn new(size: u32, border_width: u32, margin: u32) -> Self {
        Self {
            size,
            border_width,
            margin,
            ..Self::default()
        }
    }

    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    pub fn with_border_color(mut self, border_color: Rgba) -> Self {
        self.border_color = border_color;
        self
    }

    /// Outer box side: content plus both borders.
    #[inline]
    pub fn box_size(&self) -> u32 {
        self.size + 2 * self.border_width
    }

    /// Clone the styling into an element placed at `origin`, fully visible
    /// and without margin.
    pub fn instantiate(&self, origin: Point) -> Element {
        Element {
            width: self.size,
            height: self.size,
            border_width: self.border_width,
            border_color: self.border_color,
            margin: 0,
            background: self.background,
            opacity: Element::OPAQUE,
            position: origin,
        }
    }
}

impl Default for CellTemplate {
    /// 6px cell, 1px black border, 5px gap.
    fn default() -> Self {
        Self {
            size: 6,
            border_width: 1,
            margin: 5,
            background: Self::DEFAULT_BACKGROUND,
            border_color: Rgba::BLACK,
        }
    }
}
