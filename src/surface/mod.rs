//! Host surfaces.
//!
//! The grid renderer never draws anything itself. It tells a [`Surface`] how
//! big the canvas is, appends one [`Element`] per cell, and afterwards only
//! ever updates two properties on those elements: background and opacity.
//!
//! # Implementations
//!
//! - [`MemorySurface`] - records elements; headless rendering and tests
//! - [`TerminalSurface`] - projects the canvas onto terminal cells via crossterm
//!
//! A surface's [`Default`] is its "default canvas": what a display uses when
//! configuration does not name one.

mod element;
mod memory;
mod source;
mod terminal;

pub use element::Element;
pub use memory::{MemoryDocument, MemorySurface};
pub use source::CanvasSource;
pub use terminal::{TerminalScale, TerminalSurface};

use crate::types::{Extent, Rgba};

/// Handle to an element appended to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// The container a grid renders into.
pub trait Surface {
    /// Set the canvas box size.
    fn set_size(&mut self, extent: Extent);

    /// Current canvas box size.
    fn size(&self) -> Extent;

    /// Append a child element, returning its handle.
    fn append(&mut self, element: Element) -> ElementId;

    /// Set an element's fill color. Unknown handles are ignored.
    fn set_background(&mut self, id: ElementId, color: Rgba);

    /// Set an element's opacity (0.0-1.0). Unknown handles are ignored.
    fn set_opacity(&mut self, id: ElementId, opacity: f32);

    /// Remove every child element.
    fn clear(&mut self);

    /// Number of child elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
