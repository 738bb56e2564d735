//! Interaction - pointer events, cell handlers, and what they tell the host.
//!
//! A display binds the configured handlers to every rendered element. When
//! the host reports a pointer event, the display resolves it to a cell of
//! the active frame and calls the matching handler with that cell.
//!
//! # Verdicts
//!
//! Handlers may return `bool`, `()` or a [`Verdict`] directly:
//!
//! | return | verdict | host must honor |
//! |---|---|---|
//! | `false` | `Suppress` | `PREVENT_DEFAULT \| STOP_PROPAGATION` |
//! | `true`, `()` | `Proceed` | nothing |
//!
//! # Example
//!
//! ```
//! use spark_matrix::interaction::{EventHandlers, Suppress, Verdict};
//!
//! let handlers = EventHandlers::new()
//!     .on_click(|cell| {
//!         cell.toggle();
//!         false
//!     })
//!     .on_hover(|_cell| {});
//!
//! assert!(handlers.has_click());
//! assert_eq!(Verdict::from(false).suppress(), Suppress::all());
//! ```

mod bindings;

pub use bindings::{Bindings, HoverTracker};

use std::fmt;
use std::rc::Rc;

use bitflags::bitflags;

use crate::matrix::Cell;
use crate::surface::ElementId;
use crate::types::Point;

// =============================================================================
// POINTER EVENTS
// =============================================================================

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary-button activation.
    Click,
    /// The pointer entered the target. Always fires the hover handler.
    HoverEnter,
    /// The pointer moved over the target. Fires the hover handler only when
    /// the hovered cell changes.
    Move,
}

/// Where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A specific rendered element, as hosts with their own hit testing
    /// report it.
    Element(ElementId),
    /// A point on the canvas, resolved through the grid's hit test.
    Canvas(Point),
}

/// A pointer event reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub target: PointerTarget,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, target: PointerTarget) -> Self {
        Self { kind, target }
    }

    /// Click on an element.
    pub fn click(element: ElementId) -> Self {
        Self::new(PointerKind::Click, PointerTarget::Element(element))
    }

    /// Pointer entered an element.
    pub fn hover(element: ElementId) -> Self {
        Self::new(PointerKind::HoverEnter, PointerTarget::Element(element))
    }

    /// Click at a canvas point.
    pub fn click_at(point: Point) -> Self {
        Self::new(PointerKind::Click, PointerTarget::Canvas(point))
    }

    /// Pointer moved to a canvas point.
    pub fn move_at(point: Point) -> Self {
        Self::new(PointerKind::Move, PointerTarget::Canvas(point))
    }
}

// =============================================================================
// VERDICT
// =============================================================================

/// A handler's decision about the platform's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    #[default]
    Proceed,
    Suppress,
}

impl Verdict {
    /// Flags the host must honor for this verdict.
    pub fn suppress(self) -> Suppress {
        match self {
            Verdict::Proceed => Suppress::empty(),
            Verdict::Suppress => Suppress::PREVENT_DEFAULT | Suppress::STOP_PROPAGATION,
        }
    }
}

impl From<bool> for Verdict {
    fn from(proceed: bool) -> Self {
        if proceed {
            Verdict::Proceed
        } else {
            Verdict::Suppress
        }
    }
}

impl From<()> for Verdict {
    fn from(_: ()) -> Self {
        Verdict::Proceed
    }
}

bitflags! {
    /// What the host must do with the platform event after dispatch.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Suppress: u8 {
        const PREVENT_DEFAULT  = 0b01;
        const STOP_PROPAGATION = 0b10;
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Per-cell pointer handler.
///
/// Uses `Rc<dyn Fn>` so a handler can be shared by the defaults layer and
/// every configured display.
pub type CellHandler = Rc<dyn Fn(&mut Cell) -> Verdict>;

/// The `events` option: optional click and hover handlers.
#[derive(Clone, Default)]
pub struct EventHandlers {
    pub on_click: Option<CellHandler>,
    pub on_hover: Option<CellHandler>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click<F, R>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Cell) -> R + 'static,
        R: Into<Verdict>,
    {
        self.on_click = Some(wrap(handler));
        self
    }

    pub fn on_hover<F, R>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Cell) -> R + 'static,
        R: Into<Verdict>,
    {
        self.on_hover = Some(wrap(handler));
        self
    }

    pub fn has_click(&self) -> bool {
        self.on_click.is_some()
    }

    pub fn has_hover(&self) -> bool {
        self.on_hover.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.on_click.is_none() && self.on_hover.is_none()
    }

    /// The handler an event of `kind` fires.
    pub fn handler_for(&self, kind: PointerKind) -> Option<&CellHandler> {
        match kind {
            PointerKind::Click => self.on_click.as_ref(),
            PointerKind::HoverEnter | PointerKind::Move => self.on_hover.as_ref(),
        }
    }
}

fn wrap<F, R>(handler: F) -> CellHandler
where
    F: Fn(&mut Cell) -> R + 'static,
    R: Into<Verdict>,
{
    Rc::new(move |cell: &mut Cell| handler(cell).into())
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field("on_click", &self.has_click())
            .field("on_hover", &self.has_hover())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Matrix, RawCell, RawMatrix};

    fn blank_cell() -> Cell {
        let matrix = Matrix::normalize(&RawMatrix::filled(1, 1, RawCell::Blank)).unwrap();
        matrix.cell(0, 0).unwrap().clone()
    }

    #[test]
    fn test_verdict_from_returns() {
        assert_eq!(Verdict::from(false), Verdict::Suppress);
        assert_eq!(Verdict::from(true), Verdict::Proceed);
        assert_eq!(Verdict::from(()), Verdict::Proceed);
    }

    #[test]
    fn test_verdict_suppress_flags() {
        let flags = Verdict::Suppress.suppress();
        assert!(flags.contains(Suppress::PREVENT_DEFAULT));
        assert!(flags.contains(Suppress::STOP_PROPAGATION));
        assert!(Verdict::Proceed.suppress().is_empty());
    }

    #[test]
    fn test_handlers_wrap_return_types() {
        let handlers = EventHandlers::new()
            .on_click(|cell: &mut Cell| {
                cell.toggle();
                false
            })
            .on_hover(|_: &mut Cell| {});

        let mut cell = blank_cell();
        let click = handlers.handler_for(PointerKind::Click).unwrap();
        assert_eq!(click(&mut cell), Verdict::Suppress);
        assert!(cell.print);

        let hover = handlers.handler_for(PointerKind::Move).unwrap();
        assert_eq!(hover(&mut cell), Verdict::Proceed);
        assert!(handlers.handler_for(PointerKind::HoverEnter).is_some());
    }

    #[test]
    fn test_handlers_empty() {
        let handlers = EventHandlers::new();
        assert!(handlers.is_empty());
        assert!(handlers.handler_for(PointerKind::Click).is_none());
        assert_eq!(
            format!("{handlers:?}"),
            "EventHandlers { on_click: false, on_hover: false }"
        );
    }

    #[test]
    fn test_pointer_event_constructors() {
        let event = PointerEvent::click(ElementId(3));
        assert_eq!(event.kind, PointerKind::Click);
        assert_eq!(event.target, PointerTarget::Element(ElementId(3)));

        let event = PointerEvent::move_at(Point::new(4, 5));
        assert_eq!(event.kind, PointerKind::Move);
        assert_eq!(event.target, PointerTarget::Canvas(Point::new(4, 5)));
    }
}
