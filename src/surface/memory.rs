//! In-memory host surface.
//!
//! Keeps every appended element in insertion order so callers can inspect
//! exactly what a real host would have been told to draw. Used for headless
//! rendering and throughout the tests.

use std::collections::HashMap;

use super::{Element, ElementId, Surface};
use crate::types::{Extent, Rgba};

// =============================================================================
// MemorySurface
// =============================================================================

/// A canvas that records elements instead of drawing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySurface {
    size: Extent,
    elements: Vec<Element>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Children in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Elements currently drawn (opacity above zero).
    pub fn visible_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_visible()).count()
    }
}

impl Surface for MemorySurface {
    fn set_size(&mut self, extent: Extent) {
        self.size = extent;
    }

    fn size(&self) -> Extent {
        self.size
    }

    fn append(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    fn set_background(&mut self, id: ElementId, color: Rgba) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.background = color;
        }
    }

    fn set_opacity(&mut self, id: ElementId, opacity: f32) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.opacity = opacity;
        }
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

// =============================================================================
// MemoryDocument
// =============================================================================

/// Keyed registry of surfaces, for resolving canvas lookup keys.
///
/// ```
/// use spark_matrix::surface::{CanvasSource, MemoryDocument, MemorySurface};
///
/// let mut document = MemoryDocument::new();
/// document.insert("matrix", MemorySurface::new());
///
/// let source = CanvasSource::lookup("matrix", move |key| document.take(key));
/// assert!(source.prepare().is_ok());
/// ```
#[derive(Debug, Default)]
pub struct MemoryDocument {
    surfaces: HashMap<String, MemorySurface>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, surface: MemorySurface) {
        self.surfaces.insert(key.into(), surface);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.surfaces.contains_key(key)
    }

    /// Remove and return the surface registered under `key`.
    pub fn take(&mut self, key: &str) -> Option<MemorySurface> {
        self.surfaces.remove(key)
    }
}
