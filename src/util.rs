//! Helpers for mapping shell input onto the grid.

use crate::grid::Point;

/// Map a window-relative pixel position to the grid coordinate under it.
///
/// `pixel_width` is the full width of the square board as rendered and
/// `grid_size` the number of cells per side; each cell then covers
/// `pixel_width / grid_size` pixels (integer division). The board is
/// drawn with rows running along the x axis, so the horizontal position
/// selects the row and the vertical position the column.
///
/// Out-of-range input clamps instead of failing: negative positions map
/// to the first row/column and positions past the far edge to the last,
/// so any pointer position a shell can produce yields a valid
/// coordinate. A board rendered narrower than one pixel per cell is
/// treated as one pixel per cell.
///
/// `grid_size` must be non-zero.
pub fn point_from_screen(x: i32, y: i32, grid_size: usize, pixel_width: u32) -> Point {
    debug_assert!(grid_size > 0);

    let gap = (pixel_width as usize / grid_size).max(1);

    Point {
        row: (x.max(0) as usize / gap).min(grid_size - 1),
        col: (y.max(0) as usize / gap).min(grid_size - 1),
    }
}
