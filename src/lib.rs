//! Core engine for an interactive grid pathfinder.
//!
//! A presentation shell edits a [`Grid`] (designating start, end and
//! obstacle cells), then calls [`run_search`] and receives a synchronous
//! stream of [`StepState`] notifications to render while A* works toward
//! the shortest 4-directional, unit-cost path. Shells that animate the
//! search drive a [`PathFinder`] one [`step`](PathFinder::step) at a
//! time instead.

pub mod distance;
pub mod error;
pub mod find;
pub mod grid;
pub mod path;
pub mod util;

pub use error::{Error, Result};
pub use find::{run_search, PathFinder, PathFinderState, PathResult, StepState};
pub use grid::{Cell, Grid, Point, Role, SearchState};
pub use util::point_from_screen;
