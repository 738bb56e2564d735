//! Element bindings and hover tracking.

use std::collections::HashMap;

use super::{EventHandlers, PointerKind};
use crate::surface::ElementId;

/// What one element is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Binding {
    x: usize,
    y: usize,
    click: bool,
    hover: bool,
}

impl Binding {
    fn accepts(&self, kind: PointerKind) -> bool {
        match kind {
            PointerKind::Click => self.click,
            PointerKind::HoverEnter | PointerKind::Move => self.hover,
        }
    }
}

/// Element → cell registry built when a display initializes.
///
/// An element is only bound for the handlers that exist at bind time, so an
/// event kind without a handler never resolves.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    by_element: HashMap<ElementId, Binding>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `element` to cell `(x, y)` for whichever of `handlers` are set.
    ///
    /// Returns `false` (and binds nothing) when `handlers` is empty.
    pub fn bind(&mut self, element: ElementId, x: usize, y: usize, handlers: &EventHandlers) -> bool {
        if handlers.is_empty() {
            return false;
        }
        self.by_element.insert(
            element,
            Binding {
                x,
                y,
                click: handlers.has_click(),
                hover: handlers.has_hover(),
            },
        );
        true
    }

    /// Cell coordinates bound to `element` for events of `kind`.
    pub fn resolve(&self, element: ElementId, kind: PointerKind) -> Option<(usize, usize)> {
        self.by_element
            .get(&element)
            .filter(|binding| binding.accepts(kind))
            .map(|binding| (binding.x, binding.y))
    }

    pub fn is_bound(&self, element: ElementId) -> bool {
        self.by_element.contains_key(&element)
    }

    pub fn len(&self) -> usize {
        self.by_element.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_element.is_empty()
    }

    /// Drop every binding.
    pub fn clear(&mut self) {
        self.by_element.clear();
    }
}

/// Remembers which cell the pointer is over, so movement within one cell
/// fires a single hover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: Option<(usize, usize)>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<(usize, usize)> {
        self.hovered
    }

    /// Record the pointer over `cell` (or over no cell).
    ///
    /// Returns the newly entered cell when it differs from the previous one.
    pub fn update(&mut self, cell: Option<(usize, usize)>) -> Option<(usize, usize)> {
        if cell == self.hovered {
            return None;
        }
        self.hovered = cell;
        cell
    }

    pub fn reset(&mut self) {
        self.hovered = None;
    }
}
