use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A (row, column) address on the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The persistent designation of a cell, assigned by the shell's edit
/// operations and independent of how the shell chooses to render it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Empty,
    Start,
    End,
    Obstacle,
}

/// Transient per-run search annotation. Reset to `Unvisited` via
/// [`Grid::reset_search_annotations`] before each search.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SearchState {
    Unvisited,
    Frontier,
    Visited,
}

/// One grid position: a fixed coordinate, a mutable role and the
/// search annotation of the current run.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    point: Point,
    pub role: Role,
    pub search_state: SearchState,
}

impl Cell {
    fn new(point: Point) -> Self {
        Self {
            point,
            role: Role::Empty,
            search_state: SearchState::Unvisited,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn is_traversable(&self) -> bool {
        self.role != Role::Obstacle
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match (self.role, self.search_state) {
                (Role::Obstacle, _) => "X",
                (Role::Start, _) => "S",
                (Role::End, _) => "E",
                (Role::Empty, SearchState::Frontier) => "+",
                (Role::Empty, SearchState::Visited) => ".",
                (Role::Empty, SearchState::Unvisited) => " ",
            }
        )
    }
}

/// A square board of cells with a fixed size. Roles mutate over the
/// grid's lifetime through the edit operations; cells are re-labeled,
/// never destroyed. Adjacency is computed on demand so any obstacle
/// edit is picked up by the next search without invalidation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cell_width: u32,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a `size` x `size` grid of empty cells. `cell_width` is the
    /// pixel width of one rendered cell, kept for the shell to read back;
    /// the core never draws.
    pub fn new(size: usize, cell_width: u32) -> Self {
        let cells = (0..size)
            .map(|row| (0..size).map(|col| Cell::new(Point { row, col })).collect())
            .collect();

        Self {
            size,
            cell_width,
            cells,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_at(&self, point: Point) -> Result<&Cell> {
        if point.row < self.size && point.col < self.size {
            Ok(&self.cells[point.row][point.col])
        } else {
            Err(Error::OutOfBounds {
                point,
                size: self.size,
            })
        }
    }

    /// Assign `role` to the targeted cell. Keeping at most one `Start`
    /// and one `End` on the board is the caller's responsibility, the
    /// same policy the shell's click handling follows.
    pub fn set_role(&mut self, point: Point, role: Role) -> Result<()> {
        if point.row < self.size && point.col < self.size {
            self.cells[point.row][point.col].role = role;
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                point,
                size: self.size,
            })
        }
    }

    /// Re-label the targeted cell as empty (the shell's right-click).
    pub fn clear_role(&mut self, point: Point) -> Result<()> {
        self.set_role(point, Role::Empty)
    }

    /// Re-label every cell as empty and drop all search annotations.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.role = Role::Empty;
                cell.search_state = SearchState::Unvisited;
            }
        }
    }

    /// Set every cell's search annotation back to `Unvisited`. Roles are
    /// untouched. Idempotent; call before each search run.
    pub fn reset_search_annotations(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.search_state = SearchState::Unvisited;
            }
        }
    }

    /// The in-bounds, non-obstacle cells orthogonally adjacent to
    /// `point`, in the fixed order down, up, right, left. The order
    /// decides tie-breaking between equal-cost candidates, so it must
    /// stay stable for searches to be reproducible.
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> {
        let mut points = Vec::with_capacity(4);

        if point.row + 1 < self.size {
            points.push(Point {
                row: point.row + 1,
                col: point.col,
            });
        }
        if point.row > 0 {
            points.push(Point {
                row: point.row - 1,
                col: point.col,
            });
        }
        if point.col + 1 < self.size {
            points.push(Point {
                row: point.row,
                col: point.col + 1,
            });
        }
        if point.col > 0 {
            points.push(Point {
                row: point.row,
                col: point.col - 1,
            });
        }

        // keep only traversable cells
        points.retain(|p| self.cells[p.row][p.col].is_traversable());

        points.into_iter()
    }

    pub(crate) fn annotate(&mut self, point: Point, state: SearchState) {
        self.cells[point.row][point.col].search_state = state;
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
