//! Matrix - frames of cells and the traversal protocol.
//!
//! A [`Matrix`] is built once from a [`RawMatrix`] by [`Matrix::normalize`].
//! There is no other constructor, so every matrix has been normalized exactly
//! once and every cell's coordinates match its row/column indices.
//!
//! # Traversal
//!
//! [`Matrix::traverse`] and [`Matrix::traverse_mut`] visit a frame in
//! row-major order (row 0 first, columns left to right within a row), every
//! cell exactly once:
//!
//! ```text
//! (0,0) (1,0) (2,0)
//! (0,1) (1,1) (2,1)   visit order: 0 1 2 3 4 5
//! ```
//!
//! # Frames
//!
//! All frames share frame 0's dimensions. One frame is *active*: it is the
//! one rendered and refreshed. Switching the active frame is how animation
//! works.

mod cell;
mod raw;

pub use cell::Cell;
pub use raw::{RawCell, RawFrame, RawMatrix};

use crate::error::{DisplayError, Result, ShapeError};

// =============================================================================
// Frame
// =============================================================================

/// One full grid snapshot: rows of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<Vec<Cell>>,
}

impl Frame {
    fn normalize(raw: &RawFrame) -> Self {
        let rows = raw
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, slot)| Cell::normalize(*slot, x, y))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y)?.get(x)
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.rows.get_mut(y)?.get_mut(x)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.rows.iter_mut().flatten()
    }
}

// =============================================================================
// Matrix
// =============================================================================

/// Ordered, non-empty frames of equal dimensions plus the active frame index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    frames: Vec<Frame>,
    cols: usize,
    rows: usize,
    active: usize,
}

impl Matrix {
    /// Validate `raw` and turn every slot of every frame into a [`Cell`].
    ///
    /// - `Blank` → `print = false`, `color = None`
    /// - `Lit` → `print = true`, `color = None`
    /// - `LitWithColor(c)` → `print = true`, `color = Some(c)`
    pub fn normalize(raw: &RawMatrix) -> std::result::Result<Self, ShapeError> {
        let (cols, rows) = raw.validate()?;
        let frames = raw.frames().iter().map(Frame::normalize).collect();
        Ok(Self {
            frames,
            cols,
            rows,
            active: 0,
        })
    }

    /// `(cols, rows)`, taken from frame 0.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frame_mut(&mut self, index: usize) -> Option<&mut Frame> {
        self.frames.get_mut(index)
    }

    // -------------------------------------------------------------------------
    // Active frame
    // -------------------------------------------------------------------------

    /// Index of the frame being rendered.
    pub fn active_frame(&self) -> usize {
        self.active
    }

    /// Make `index` the rendered frame.
    pub fn set_active_frame(&mut self, index: usize) -> Result<()> {
        if index >= self.frames.len() {
            return Err(DisplayError::FrameOutOfRange {
                index,
                count: self.frames.len(),
            });
        }
        self.active = index;
        Ok(())
    }

    /// Move to the next frame, wrapping after the last. Returns the new index.
    pub fn advance_frame(&mut self) -> usize {
        self.active = (self.active + 1) % self.frames.len();
        self.active
    }

    /// Cell of the active frame.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.frames.get(self.active)?.cell(x, y)
    }

    /// Mutable cell of the active frame.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.frames.get_mut(self.active)?.cell_mut(x, y)
    }

    // -------------------------------------------------------------------------
    // Traversal
    // -------------------------------------------------------------------------

    /// Visit every cell of `frame` in row-major order as
    /// `visitor(cell, x, y, frame)`.
    ///
    /// A frame index past the end visits nothing.
    pub fn traverse<F>(&self, frame: usize, mut visitor: F)
    where
        F: FnMut(&Cell, usize, usize, usize),
    {
        let Some(target) = self.frames.get(frame) else {
            return;
        };
        for cell in target.cells() {
            visitor(cell, cell.x(), cell.y(), frame);
        }
    }

    /// Like [`traverse`](Self::traverse), with mutable access to each cell.
    pub fn traverse_mut<F>(&mut self, frame: usize, mut visitor: F)
    where
        F: FnMut(&mut Cell, usize, usize, usize),
    {
        let Some(target) = self.frames.get_mut(frame) else {
            return;
        };
        for cell in target.cells_mut() {
            let (x, y) = cell.position();
            visitor(cell, x, y, frame);
        }
    }

    /// Visit the cell at `(x, y)` in every frame.
    pub(crate) fn for_each_layer<F>(&mut self, x: usize, y: usize, mut visitor: F)
    where
        F: FnMut(&mut Cell),
    {
        for frame in &mut self.frames {
            if let Some(cell) = frame.cell_mut(x, y) {
                visitor(cell);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;

    fn sample() -> RawMatrix {
        RawMatrix::from_json(
            r#"[
                [[1, 0, {"color": "red"}], [0, 1, 0]],
                [[0, 0, 0], [1, 1, 1]]
            ]"#,
        )
        .unwrap()
    }

    // -------------------------------------------------------------------------
    // Normalize
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalize_all_frames() {
        let matrix = Matrix::normalize(&sample()).unwrap();
        assert_eq!(matrix.dimensions(), (3, 2));
        assert_eq!(matrix.frame_count(), 2);

        let cell = matrix.frame(0).unwrap().cell(2, 0).unwrap();
        assert!(cell.print);
        assert_eq!(cell.color, Some(Rgba::RED));

        let cell = matrix.frame(1).unwrap().cell(1, 1).unwrap();
        assert!(cell.print);
        assert_eq!(cell.color, None);
    }

    #[test]
    fn test_normalize_coordinates_match_indices() {
        let matrix = Matrix::normalize(&sample()).unwrap();
        for index in 0..matrix.frame_count() {
            let frame = matrix.frame(index).unwrap();
            for y in 0..frame.rows() {
                for x in 0..frame.cols() {
                    assert_eq!(frame.cell(x, y).unwrap().position(), (x, y));
                }
            }
        }
    }

    #[test]
    fn test_normalize_is_repeatable() {
        let raw = sample();
        let first = Matrix::normalize(&raw).unwrap();
        let second = Matrix::normalize(&raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_normalize_rejects_bad_shape() {
        let ragged = RawMatrix::from_json("[[[1, 1], [1]]]").unwrap();
        assert!(matches!(
            Matrix::normalize(&ragged),
            Err(ShapeError::RaggedRow { row: 1, .. })
        ));
        assert_eq!(
            Matrix::normalize(&RawMatrix::default()),
            Err(ShapeError::NoFrames)
        );
    }

    // -------------------------------------------------------------------------
    // Traverse
    // -------------------------------------------------------------------------

    #[test]
    fn test_traverse_row_major() {
        let matrix = Matrix::normalize(&sample()).unwrap();
        let mut visited = Vec::new();
        matrix.traverse(0, |cell, x, y, frame| {
            assert_eq!(cell.position(), (x, y));
            assert_eq!(frame, 0);
            visited.push((x, y));
        });
        assert_eq!(visited, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_traverse_other_frame() {
        let matrix = Matrix::normalize(&sample()).unwrap();
        let mut printed = Vec::new();
        matrix.traverse(1, |cell, _, _, frame| {
            assert_eq!(frame, 1);
            printed.push(cell.print);
        });
        assert_eq!(printed, vec![false, false, false, true, true, true]);
    }

    #[test]
    fn test_traverse_out_of_range_visits_nothing() {
        let matrix = Matrix::normalize(&sample()).unwrap();
        let mut count = 0;
        matrix.traverse(9, |_, _, _, _| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_traverse_mut_mutates_cells() {
        let mut matrix = Matrix::normalize(&sample()).unwrap();
        matrix.traverse_mut(0, |cell, _, _, _| {
            cell.print = true;
            cell.color = Some(Rgba::BLUE);
        });
        let mut all_blue = true;
        matrix.traverse(0, |cell, _, _, _| {
            all_blue &= cell.print && cell.color == Some(Rgba::BLUE);
        });
        assert!(all_blue);

        // Other frames untouched
        assert!(!matrix.frame(1).unwrap().cell(0, 0).unwrap().print);
    }

    // -------------------------------------------------------------------------
    // Active frame
    // -------------------------------------------------------------------------

    #[test]
    fn test_active_frame_switching() {
        let mut matrix = Matrix::normalize(&sample()).unwrap();
        assert_eq!(matrix.active_frame(), 0);
        assert!(matrix.cell(0, 0).unwrap().print);

        matrix.set_active_frame(1).unwrap();
        assert!(!matrix.cell(0, 0).unwrap().print);

        assert_eq!(matrix.advance_frame(), 0);
        assert_eq!(matrix.advance_frame(), 1);

        let err = matrix.set_active_frame(2).unwrap_err();
        assert!(matches!(
            err,
            DisplayError::FrameOutOfRange { index: 2, count: 2 }
        ));
        assert_eq!(matrix.active_frame(), 1);
    }

    #[test]
    fn test_cell_mut_targets_active_frame() {
        let mut matrix = Matrix::normalize(&sample()).unwrap();
        matrix.set_active_frame(1).unwrap();
        matrix.cell_mut(0, 0).unwrap().print = true;
        assert!(matrix.frame(1).unwrap().cell(0, 0).unwrap().print);
        assert!(matrix.frame(0).unwrap().cell(0, 0).unwrap().print);
        assert!(!matrix.frame(0).unwrap().cell(1, 0).unwrap().print);
    }
}
