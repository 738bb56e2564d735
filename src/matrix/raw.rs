//! Raw matrix input - what the caller writes before normalization.
//!
//! A raw slot is one of three things: off, on, or on with its own color.
//! JSON literals follow the same truthiness the artwork is usually written
//! with: `0`, `false`, `null` and `""` are off, any other scalar is on, and an
//! object is on (with a color if it carries a `color` string).

use serde::Deserialize;
use serde_json::Value;

use crate::error::ShapeError;
use crate::types::{ColorParseError, Rgba};

// =============================================================================
// RawCell
// =============================================================================

/// One pre-normalization matrix slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "Value")]
pub enum RawCell {
    /// Not printed.
    #[default]
    Blank,
    /// Printed with the template's default styling.
    Lit,
    /// Printed with an explicit color.
    LitWithColor(Rgba),
}

impl RawCell {
    /// Shorthand for `LitWithColor`.
    pub const fn color(color: Rgba) -> Self {
        Self::LitWithColor(color)
    }

    /// Whether this slot prints.
    #[inline]
    pub const fn is_lit(&self) -> bool {
        !matches!(self, Self::Blank)
    }
}

impl From<bool> for RawCell {
    fn from(lit: bool) -> Self {
        if lit { Self::Lit } else { Self::Blank }
    }
}

impl From<i32> for RawCell {
    fn from(value: i32) -> Self {
        Self::from(value != 0)
    }
}

impl From<Rgba> for RawCell {
    fn from(color: Rgba) -> Self {
        Self::LitWithColor(color)
    }
}

impl TryFrom<Value> for RawCell {
    type Error = ColorParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let cell = match value {
            Value::Null => Self::Blank,
            Value::Bool(b) => Self::from(b),
            Value::Number(n) => Self::from(n.as_f64().is_some_and(|v| v != 0.0)),
            Value::String(s) => Self::from(!s.is_empty()),
            Value::Array(_) => Self::Lit,
            Value::Object(map) => match map.get("color") {
                Some(Value::String(c)) if !c.is_empty() => Self::LitWithColor(c.parse()?),
                _ => Self::Lit,
            },
        };
        Ok(cell)
    }
}

// =============================================================================
// RawMatrix
// =============================================================================

/// One frame of raw slots: rows of columns.
pub type RawFrame = Vec<Vec<RawCell>>;

/// Ordered frames of raw slots, as supplied by configuration.
///
/// Nothing is validated until the matrix is normalized; use
/// [`RawMatrix::validate`] to check the shape up front.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct RawMatrix {
    frames: Vec<RawFrame>,
}

impl RawMatrix {
    pub fn new(frames: Vec<RawFrame>) -> Self {
        Self { frames }
    }

    /// A matrix of `rows` rows by `cols` columns, every slot set to `value`.
    pub fn filled(cols: usize, rows: usize, value: RawCell) -> Self {
        Self::new(vec![vec![vec![value; cols]; rows]])
    }

    /// Parse a JSON literal of the form `[[[slot, ...], ...], ...]`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn frames(&self) -> &[RawFrame] {
        &self.frames
    }

    /// Append a frame (used to build animations).
    pub fn push_frame(&mut self, frame: RawFrame) {
        self.frames.push(frame);
    }

    /// Check the matrix is non-empty, rectangular, and that all frames
    /// share frame 0's dimensions.
    ///
    /// Returns `(cols, rows)`.
    pub fn validate(&self) -> Result<(usize, usize), ShapeError> {
        let first = self.frames.first().ok_or(ShapeError::NoFrames)?;
        let (cols, rows) = frame_shape(0, first)?;

        for (index, frame) in self.frames.iter().enumerate().skip(1) {
            let (found_cols, found_rows) = frame_shape(index, frame)?;
            if (found_cols, found_rows) != (cols, rows) {
                return Err(ShapeError::FrameMismatch {
                    frame: index,
                    expected_cols: cols,
                    expected_rows: rows,
                    found_cols,
                    found_rows,
                });
            }
        }

        Ok((cols, rows))
    }
}

impl From<RawFrame> for RawMatrix {
    fn from(frame: RawFrame) -> Self {
        Self::new(vec![frame])
    }
}

/// Dimensions of one frame, rejecting empty and ragged frames.
fn frame_shape(index: usize, frame: &RawFrame) -> Result<(usize, usize), ShapeError> {
    let cols = frame.first().map_or(0, Vec::len);
    if cols == 0 {
        return Err(ShapeError::EmptyFrame { frame: index });
    }

    for (row, cells) in frame.iter().enumerate() {
        if cells.len() != cols {
            return Err(ShapeError::RaggedRow {
                frame: index,
                row,
                expected: cols,
                found: cells.len(),
            });
        }
    }

    Ok((cols, frame.len()))
}

// =============================================================================
// Tests
// =============================================================================
