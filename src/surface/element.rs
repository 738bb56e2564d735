//! Element - the per-cell visual element handed to a host surface.

use crate::types::{Point, Rgba};

/// Box-styled, absolutely positioned visual element.
///
/// Hosts receive one of these per cell from the grid renderer and hand back
/// an [`ElementId`](super::ElementId) that identifies it from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Content width in pixels.
    pub width: u32,
    /// Content height in pixels.
    pub height: u32,
    pub border_width: u32,
    pub border_color: Rgba,
    /// Box margin. The grid consumes the template margin as gap, so rendered
    /// elements always carry 0 here.
    pub margin: u32,
    pub background: Rgba,
    /// 0.0 (hidden) to 1.0 (fully visible).
    pub opacity: f32,
    /// Offset from the canvas origin.
    pub position: Point,
}

impl Element {
    pub const OPAQUE: f32 = 1.0;
    pub const HIDDEN: f32 = 0.0;

    /// Outer box size: content plus both borders.
    #[inline]
    pub fn outer_width(&self) -> u32 {
        self.width + 2 * self.border_width
    }

    #[inline]
    pub fn outer_height(&self) -> u32 {
        self.height + 2 * self.border_width
    }

    /// Whether the element is drawn at all.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}
