//! Built-in defaults: the banner artwork and the default option layer.

use std::rc::Rc;
use std::time::Duration;

use super::options::DisplayOptions;
use crate::interaction::EventHandlers;
use crate::layout::CellTemplate;
use crate::matrix::{RawCell, RawFrame, RawMatrix};
use crate::types::Rgba;

/// Frame period used when animation is on and no duration is given.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1300);

// `#` lit, `.` blank, `*` lit with the next color from BANNER_COLORS.
const BANNER: [&str; 11] = [
    "#.#.###.###.##..###.#.#",
    "###.#.#..#..#.#..#..#.#",
    "#.#.###..#..###..#...#.",
    "#.#.#.#..#..#.#..#..#.#",
    "#.#.#.#..#..#.#.###.#.#",
    ".......................",
    "###.#.#.###.###.###.***",
    ".#..###.#.#.#...#...***",
    ".#..#.#.###.###.###.***",
    ".#..#.#.#.#.#.#.#...***",
    "###.#.#.#.#.###.###.***",
];

const BANNER_COLORS: [Rgba; 15] = [
    Rgba::rgb(173, 150, 199),
    Rgba::rgb(108, 235, 216),
    Rgba::rgb(91, 143, 154),
    Rgba::rgb(247, 107, 168),
    Rgba::rgb(206, 168, 247),
    Rgba::rgb(94, 72, 102),
    Rgba::rgb(141, 28, 239),
    Rgba::rgb(225, 64, 165),
    Rgba::rgb(15, 156, 40),
    Rgba::rgb(71, 51, 251),
    Rgba::rgb(198, 209, 145),
    Rgba::rgb(129, 98, 5),
    Rgba::rgb(226, 19, 107),
    Rgba::rgb(140, 205, 21),
    Rgba::rgb(252, 1, 240),
];

/// The default artwork: a single 23×11 frame with a colored block in the
/// bottom-right corner.
pub fn banner_matrix() -> RawMatrix {
    let mut colors = BANNER_COLORS.iter().copied().cycle();
    let frame: RawFrame = BANNER
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    '#' => RawCell::Lit,
                    '*' => colors.next().map_or(RawCell::Lit, RawCell::LitWithColor),
                    _ => RawCell::Blank,
                })
                .collect()
        })
        .collect();
    RawMatrix::from(frame)
}

/// The default layer every display configuration is merged over.
///
/// Leaves `canvas` unset: the surface type's [`Default`] is the default
/// canvas.
pub fn default_options<S>() -> DisplayOptions<S> {
    DisplayOptions {
        canvas: None,
        matrix: Some(banner_matrix()),
        element: Some(Rc::new(CellTemplate::default)),
        events: Some(EventHandlers::new()),
        animation: Some(false),
        duration: Some(DEFAULT_DURATION),
        debug: Some(false),
        auto_resize: Some(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    #[test]
    fn test_banner_shape() {
        let raw = banner_matrix();
        assert_eq!(raw.validate(), Ok((23, 11)));
    }

    #[test]
    fn test_banner_colors() {
        let matrix = Matrix::normalize(&banner_matrix()).unwrap();
        assert_eq!(matrix.cell(20, 6).unwrap().color, Some(Rgba::rgb(173, 150, 199)));
        assert_eq!(matrix.cell(22, 10).unwrap().color, Some(Rgba::rgb(252, 1, 240)));
        assert_eq!(matrix.cell(0, 0).unwrap().color, None);

        let mut colored = 0;
        matrix.traverse(0, |cell, _, _, _| colored += usize::from(cell.color.is_some()));
        assert_eq!(colored, BANNER_COLORS.len());
    }

    #[test]
    fn test_blank_separator_row() {
        let matrix = Matrix::normalize(&banner_matrix()).unwrap();
        let frame = matrix.frame(0).unwrap();
        assert!((0..23).all(|x| !frame.cell(x, 5).unwrap().print));
    }

    #[test]
    fn test_default_options() {
        let options: DisplayOptions<()> = default_options();
        assert!(options.canvas.is_none());
        assert_eq!(options.duration, Some(DEFAULT_DURATION));
        assert_eq!(options.animation, Some(false));
        let template = (options.element.unwrap())();
        assert_eq!(template, CellTemplate::default());
    }
}
