//! Error types for the pathfinder core.

use crate::grid::{Point, Role};

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations surfaced to the shell before any search work
/// begins. An exhausted or aborted search is not an error; those are
/// ordinary [`PathFinderState`](crate::find::PathFinderState) values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Coordinate lies outside the grid
    #[error("point {point} is outside the {size}x{size} grid")]
    OutOfBounds { point: Point, size: usize },

    /// Search requested without properly designated endpoints
    #[error("cell {point} is not designated {expected:?}")]
    InvalidEndpoints { point: Point, expected: Role },
}
