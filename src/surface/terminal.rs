//! Terminal host surface.
//!
//! Projects the pixel canvas onto terminal character cells. Each element is
//! drawn as a single dot glyph at the terminal cell containing its top-left
//! corner, colored with its background. Hidden elements are drawn as blanks
//! so a refresh that turns a dot off erases it.
//!
//! # Scale
//!
//! [`TerminalScale`] says how many canvas pixels one terminal column and one
//! terminal row stand for. With the default template (13px pitch) the
//! default scale puts one dot in every terminal cell.
//!
//! # Input
//!
//! [`TerminalSurface::translate_mouse`] turns crossterm mouse events into
//! canvas-coordinate [`PointerEvent`]s at the centre of the terminal cell
//! that was hit.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use super::{Element, ElementId, Surface};
use crate::interaction::PointerEvent;
use crate::types::{Extent, Point, Rgba};

const DOT: &str = "●";
const BLANK: &str = " ";

// =============================================================================
// TerminalScale
// =============================================================================

/// Canvas pixels per terminal column / row. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalScale {
    col_px: u32,
    row_px: u32,
}

impl TerminalScale {
    pub fn new(col_px: u32, row_px: u32) -> Self {
        Self {
            col_px: col_px.max(1),
            row_px: row_px.max(1),
        }
    }

    pub fn col_px(&self) -> u32 {
        self.col_px
    }

    pub fn row_px(&self) -> u32 {
        self.row_px
    }

    /// Terminal `(column, row)` holding canvas pixel `point`.
    fn to_terminal(self, point: Point) -> (u32, u32) {
        (point.left / self.col_px, point.top / self.row_px)
    }

    /// Canvas pixel at the centre of terminal cell `(column, row)`.
    fn to_canvas(self, column: u32, row: u32) -> Point {
        Point::new(
            column
                .saturating_mul(self.col_px)
                .saturating_add(self.col_px / 2),
            row.saturating_mul(self.row_px)
                .saturating_add(self.row_px / 2),
        )
    }
}

impl Default for TerminalScale {
    fn default() -> Self {
        Self::new(13, 13)
    }
}

// =============================================================================
// TerminalSurface
// =============================================================================

/// A canvas drawn onto a terminal through crossterm.
///
/// Style changes are recorded immediately and written out by
/// [`present`](Self::present).
#[derive(Debug)]
pub struct TerminalSurface<W: Write = Stdout> {
    out: W,
    scale: TerminalScale,
    /// Terminal cell of the canvas origin.
    origin: (u16, u16),
    size: Extent,
    elements: Vec<Element>,
    /// Terminal area still showing cleared elements, blanked by the next
    /// `present`.
    stale: Option<(u32, u32)>,
}

impl TerminalSurface<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for TerminalSurface<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            scale: TerminalScale::default(),
            origin: (0, 0),
            size: Extent::ZERO,
            elements: Vec::new(),
            stale: None,
        }
    }

    pub fn with_scale(mut self, scale: TerminalScale) -> Self {
        self.scale = scale;
        self
    }

    /// Place the canvas origin at terminal `(column, row)`.
    pub fn with_origin(mut self, column: u16, row: u16) -> Self {
        self.origin = (column, row);
        self
    }

    pub fn scale(&self) -> TerminalScale {
        self.scale
    }

    /// Canvas size in terminal cells.
    pub fn terminal_size(&self) -> (u32, u32) {
        (
            self.size.width.div_ceil(self.scale.col_px),
            self.size.height.div_ceil(self.scale.row_px),
        )
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Write every element to the terminal and flush.
    ///
    /// After a [`clear`](Surface::clear), the area the canvas covered is
    /// blanked first.
    pub fn present(&mut self) -> io::Result<()> {
        if let Some((columns, rows)) = self.stale.take() {
            let blank = BLANK.repeat(columns as usize);
            for row in 0..clamp_u16(rows) {
                queue!(
                    self.out,
                    MoveTo(self.origin.0, self.origin.1.saturating_add(row)),
                    Print(&blank)
                )?;
            }
        }
        for element in &self.elements {
            let (column, row) = self.scale.to_terminal(element.position);
            let column = clamp_u16(column).saturating_add(self.origin.0);
            let row = clamp_u16(row).saturating_add(self.origin.1);
            let glyph = if element.is_visible() { DOT } else { BLANK };
            queue!(
                self.out,
                MoveTo(column, row),
                SetForegroundColor(to_color(element.background)),
                Print(glyph)
            )?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Convert a crossterm mouse event into a canvas pointer event.
    ///
    /// Left-button presses become clicks and plain motion becomes moves.
    /// Everything else, and anything left of or above the canvas origin,
    /// yields `None`.
    pub fn translate_mouse(&self, event: MouseEvent) -> Option<PointerEvent> {
        let column = event.column.checked_sub(self.origin.0)?;
        let row = event.row.checked_sub(self.origin.1)?;
        let point = self.scale.to_canvas(u32::from(column), u32::from(row));
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::click_at(point)),
            MouseEventKind::Moved => Some(PointerEvent::move_at(point)),
            _ => None,
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
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
        let (columns, rows) = self.terminal_size();
        self.stale = Some(match self.stale {
            Some((c, r)) => (c.max(columns), r.max(rows)),
            None => (columns, rows),
        });
        self.elements.clear();
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

fn to_color(rgba: Rgba) -> Color {
    Color::Rgb {
        r: rgba.r,
        g: rgba.g,
        b: rgba.b,
    }
}

fn clamp_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{PointerKind, PointerTarget};
    use crossterm::event::KeyModifiers;

    fn element(left: u32, top: u32, opacity: f32) -> Element {
        Element {
            width: 6,
            height: 6,
            border_width: 1,
            border_color: Rgba::BLACK,
            margin: 0,
            background: Rgba::RED,
            opacity,
            position: Point::new(left, top),
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_scale_clamps_to_one() {
        let scale = TerminalScale::new(0, 0);
        assert_eq!(scale.col_px(), 1);
        assert_eq!(scale.row_px(), 1);
    }

    #[test]
    fn test_terminal_size() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.set_size(Extent::new(34, 8));
        assert_eq!(surface.terminal_size(), (3, 1));
    }

    #[test]
    fn test_present_writes_dots_and_blanks() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.append(element(0, 0, Element::OPAQUE));
        surface.append(element(13, 0, Element::HIDDEN));
        surface.present().unwrap();

        let output = String::from_utf8(surface.into_writer()).unwrap();
        assert_eq!(output.matches(DOT).count(), 1);
        // Red foreground for both elements
        assert_eq!(output.matches("38;2;255;0;0").count(), 2);
    }

    #[test]
    fn test_style_updates_recorded() {
        let mut surface = TerminalSurface::new(Vec::new());
        let id = surface.append(element(0, 0, Element::OPAQUE));
        surface.set_background(id, Rgba::BLUE);
        surface.set_opacity(id, Element::HIDDEN);
        assert_eq!(surface.elements()[0].background, Rgba::BLUE);
        assert!(!surface.elements()[0].is_visible());

        surface.clear();
        assert!(surface.is_empty());
    }

    #[test]
    fn test_clear_erases_on_present() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.set_size(Extent::new(34, 8));
        surface.append(element(0, 0, Element::OPAQUE));
        surface.present().unwrap();
        let drawn = surface.writer().len();

        surface.clear();
        surface.present().unwrap();
        let output = String::from_utf8(surface.writer()[drawn..].to_vec()).unwrap();
        assert!(!output.contains(DOT));
        // Three terminal columns, one row, blanked from the origin
        assert!(output.contains("\u{1b}[1;1H   "));

        // Only once
        let erased = surface.writer().len();
        surface.present().unwrap();
        let output = String::from_utf8(surface.writer()[erased..].to_vec()).unwrap();
        assert!(!output.contains("   "));
    }

    #[test]
    fn test_translate_with_huge_scale_saturates() {
        let surface = TerminalSurface::new(Vec::new()).with_scale(TerminalScale::new(u32::MAX, u32::MAX));
        let event = surface
            .translate_mouse(mouse(MouseEventKind::Moved, 4, 2))
            .unwrap();
        assert_eq!(event.target, PointerTarget::Canvas(Point::new(u32::MAX, u32::MAX)));
    }

    #[test]
    fn test_translate_left_click() {
        let surface = TerminalSurface::new(Vec::new()).with_origin(2, 1);
        let event = surface
            .translate_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 1))
            .unwrap();
        assert_eq!(event.kind, PointerKind::Click);
        assert_eq!(event.target, PointerTarget::Canvas(Point::new(19, 6)));
    }

    #[test]
    fn test_translate_move() {
        let surface = TerminalSurface::new(Vec::new());
        let event = surface
            .translate_mouse(mouse(MouseEventKind::Moved, 0, 0))
            .unwrap();
        assert_eq!(event.kind, PointerKind::Move);
        assert_eq!(event.target, PointerTarget::Canvas(Point::new(6, 6)));
    }

    #[test]
    fn test_translate_ignores_other_events() {
        let surface = TerminalSurface::new(Vec::new()).with_origin(5, 5);
        assert!(surface
            .translate_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 6, 6))
            .is_none());
        assert!(surface
            .translate_mouse(mouse(MouseEventKind::ScrollUp, 6, 6))
            .is_none());
        // Outside the canvas origin
        assert!(surface
            .translate_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1, 6))
            .is_none());
    }
}
