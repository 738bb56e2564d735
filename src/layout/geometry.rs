//! GridGeometry - closed-form cell placement.
//!
//! # Formulas
//!
//! ```text
//! pitch          = size + 2 * border_width + margin
//! cell_origin    = (x * pitch, y * pitch)
//! extent         = (pitch * C - margin, pitch * R - margin)
//! ```
//!
//! The trailing margin after the last column/row is not part of the canvas.
//! A grid with zero rows or zero columns has a `(0, 0)` extent.

use super::CellTemplate;
use crate::types::{Extent, Point};

/// Distance between the top-left corners of adjacent cells.
#[inline]
pub fn pitch(template: &CellTemplate) -> u32 {
    template.box_size() + template.margin
}

/// Canvas size for a `cols` × `rows` grid.
pub fn canvas_extent(template: &CellTemplate, cols: usize, rows: usize) -> Extent {
    if cols == 0 || rows == 0 {
        return Extent::ZERO;
    }
    let pitch = pitch(template);
    Extent::new(
        pitch.saturating_mul(to_u32(cols)).saturating_sub(template.margin),
        pitch.saturating_mul(to_u32(rows)).saturating_sub(template.margin),
    )
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Computed placement for one template and one grid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    template: CellTemplate,
    cols: usize,
    rows: usize,
    pitch: u32,
    extent: Extent,
}

impl GridGeometry {
    pub fn new(template: CellTemplate, cols: usize, rows: usize) -> Self {
        Self {
            template,
            cols,
            rows,
            pitch: pitch(&template),
            extent: canvas_extent(&template, cols, rows),
        }
    }

    pub fn template(&self) -> &CellTemplate {
        &self.template
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn pitch(&self) -> u32 {
        self.pitch
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Top-left corner of cell `(x, y)` relative to the canvas.
    #[inline]
    pub fn cell_origin(&self, x: usize, y: usize) -> Point {
        Point::new(
            to_u32(x).saturating_mul(self.pitch),
            to_u32(y).saturating_mul(self.pitch),
        )
    }

    /// Cell whose box contains canvas point `point`.
    ///
    /// Points in the gap between cells, or outside the grid, miss.
    pub fn hit_test(&self, point: Point) -> Option<(usize, usize)> {
        if self.pitch == 0 {
            return None;
        }
        let box_size = self.template.box_size();
        let x = (point.left / self.pitch) as usize;
        let y = (point.top / self.pitch) as usize;
        if x >= self.cols || y >= self.rows {
            return None;
        }
        if point.left % self.pitch >= box_size || point.top % self.pitch >= box_size {
            return None;
        }
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_by_three_example() {
        let geometry = GridGeometry::new(CellTemplate::default(), 3, 1);
        assert_eq!(geometry.pitch(), 13);
        assert_eq!(geometry.extent(), Extent::new(34, 8));
        assert_eq!(geometry.cell_origin(0, 0), Point::new(0, 0));
        assert_eq!(geometry.cell_origin(1, 0), Point::new(13, 0));
        assert_eq!(geometry.cell_origin(2, 0), Point::new(26, 0));
    }

    #[test]
    fn test_degenerate_extent() {
        let template = CellTemplate::default();
        assert_eq!(canvas_extent(&template, 0, 4), Extent::ZERO);
        assert_eq!(canvas_extent(&template, 4, 0), Extent::ZERO);
        assert!(GridGeometry::new(template, 0, 0).extent().is_empty());
    }

    #[test]
    fn test_no_margin() {
        let geometry = GridGeometry::new(CellTemplate::new(10, 0, 0), 2, 3);
        assert_eq!(geometry.pitch(), 10);
        assert_eq!(geometry.extent(), Extent::new(20, 30));
    }

    #[test]
    fn test_hit_test() {
        let geometry = GridGeometry::new(CellTemplate::default(), 3, 2);

        assert_eq!(geometry.hit_test(Point::new(0, 0)), Some((0, 0)));
        assert_eq!(geometry.hit_test(Point::new(7, 7)), Some((0, 0)));
        assert_eq!(geometry.hit_test(Point::new(14, 20)), Some((1, 1)));
        assert_eq!(geometry.hit_test(Point::new(33, 7)), Some((2, 0)));

        // Gap between columns 0 and 1
        assert_eq!(geometry.hit_test(Point::new(9, 0)), None);
        // Past the last column
        assert_eq!(geometry.hit_test(Point::new(39, 0)), None);
        // Past the last row
        assert_eq!(geometry.hit_test(Point::new(0, 26)), None);
    }

    #[test]
    fn test_hit_test_zero_pitch() {
        let geometry = GridGeometry::new(CellTemplate::new(0, 0, 0), 2, 2);
        assert_eq!(geometry.hit_test(Point::new(0, 0)), None);
    }
}
