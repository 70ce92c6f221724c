use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use crate::distance::manhattan;
use crate::error::{Error, Result};
use crate::grid::{Grid, Point, Role, SearchState};
use crate::path::reconstruct;

/// Incremental notification emitted while a search runs, one per cell
/// whose presentation should change. Delivered synchronously and
/// potentially thousands of times per run, so handlers must be cheap.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepState {
    /// The cell entered the frontier for the first time.
    Frontier,
    /// The cell was expanded and left the frontier.
    Visited,
    /// The cell lies on the reconstructed shortest path.
    PathMarked,
}

/// The objects we store in the frontier heap. Ordered by estimated total
/// cost, then by insertion sequence so that equal-cost candidates leave
/// the heap in the order they arrived.
#[derive(Debug, Eq)]
struct QueuedCell {
    f: usize,
    seq: u64,
    point: Point,
}

impl Ord for QueuedCell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.f, self.seq).cmp(&(other.f, other.seq)).reverse() // reverse for BinaryHeap to be a min-heap
    }
}

impl PartialOrd for QueuedCell {
    fn partial_cmp(&self, other: &QueuedCell) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedCell {
    fn eq(&self, other: &QueuedCell) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// The shortest path, ordered start-to-end: the step after the start
    /// through the end inclusive (see [`crate::path::reconstruct`]).
    pub path: Vec<Point>,
    pub start: Point,
    pub end: Point,
    /// Number of edges on the path; equals `path.len()`.
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFinderState {
    Computing,
    PathFound(PathResult),
    NoPathFound,
    Cancelled,
}

impl PathFinderState {
    fn is_done(&self) -> bool {
        !matches!(self, PathFinderState::Computing)
    }
}

/// An A* search in progress over one grid.
///
/// All run state (cost maps, predecessor map, frontier heap and its
/// membership set) lives here and is dropped with the finder; nothing
/// persists across runs except the per-cell annotations on the grid,
/// which the caller resets via [`Grid::reset_search_annotations`]
/// before starting the next run.
#[derive(Debug)]
pub struct PathFinder {
    start: Point,
    end: Point,
    g_score: HashMap<Point, usize>,
    f_score: HashMap<Point, usize>,
    came_from: HashMap<Point, Point>,
    frontier: BinaryHeap<QueuedCell>,
    in_frontier: HashSet<Point>,
    seq: u64,
    state: PathFinderState,
}

impl PathFinder {
    /// Validate the endpoints and seed the frontier with the start cell.
    ///
    /// Fails with [`Error::InvalidEndpoints`] unless `start` and `end`
    /// are in bounds and their cells hold the `Start` and `End` roles.
    pub fn new(grid: &Grid, start: Point, end: Point) -> Result<Self> {
        expect_role(grid, start, Role::Start)?;
        expect_role(grid, end, Role::End)?;

        let f_start = manhattan(start, end);

        debug!("searching {} -> {} (h = {})", start, end, f_start);

        Ok(Self {
            start,
            end,
            g_score: HashMap::from([(start, 0)]),
            f_score: HashMap::from([(start, f_start)]),
            came_from: HashMap::new(),
            frontier: BinaryHeap::from([QueuedCell {
                f: f_start,
                seq: 0,
                point: start,
            }]),
            in_frontier: HashSet::from([start]),
            seq: 1,
            state: PathFinderState::Computing,
        })
    }

    /// Pop and expand one frontier cell.
    ///
    /// Emits `Frontier` for every newly queued neighbor and `Visited`
    /// for the expanded cell (the start keeps its own presentation and
    /// is never reported). When the end is popped the path is
    /// reconstructed, `PathMarked` notifications fire, and the state
    /// moves to `PathFound`; an exhausted frontier moves it to
    /// `NoPathFound`. Shells that animate call this once per frame.
    pub fn step<F>(&mut self, grid: &mut Grid, on_step: &mut F) -> PathFinderState
    where
        F: FnMut(Point, StepState),
    {
        if self.state.is_done() {
            return self.state.clone();
        }

        let Some(visit) = self.frontier.pop() else {
            debug!("frontier exhausted, {} is unreachable", self.end);
            self.state = PathFinderState::NoPathFound;
            return self.state.clone();
        };

        // a stale twin of a cell that was re-pushed with a better
        // priority; the live entry already took it out of the set
        if !self.in_frontier.remove(&visit.point) {
            return self.state.clone();
        }

        let current = visit.point;

        // a live entry always carries the current estimate for its cell
        debug_assert_eq!(visit.f, self.f_score[&current]);

        if current == self.end {
            let path = reconstruct(&self.came_from, self.end, on_step);
            debug!("path found, {} edges", path.len());
            self.state = PathFinderState::PathFound(PathResult {
                length: path.len(),
                path,
                start: self.start,
                end: self.end,
            });
            return self.state.clone();
        }

        let current_g = self.g_score[&current];
        trace!("expanding {} (g = {})", current, current_g);

        for neighbor in grid.neighbors(current) {
            let tentative = current_g + 1;

            // strictly better only; an equal-cost rediscovery changes nothing
            if tentative < self.g_score.get(&neighbor).copied().unwrap_or(usize::MAX) {
                self.came_from.insert(neighbor, current);
                self.g_score.insert(neighbor, tentative);
                let f = tentative + manhattan(neighbor, self.end);
                self.f_score.insert(neighbor, f);

                // re-pushing an already-queued cell leaves a stale twin
                // behind, skipped at pop time via the membership set
                self.frontier.push(QueuedCell {
                    f,
                    seq: self.seq,
                    point: neighbor,
                });
                self.seq += 1;

                if self.in_frontier.insert(neighbor) {
                    grid.annotate(neighbor, SearchState::Frontier);
                    on_step(neighbor, StepState::Frontier);
                }
            }
        }

        if current != self.start {
            grid.annotate(current, SearchState::Visited);
            on_step(current, StepState::Visited);
        }

        self.state.clone()
    }

    /// Run to completion without any cancellation checks.
    pub fn finish<F>(mut self, grid: &mut Grid, on_step: &mut F) -> PathFinderState
    where
        F: FnMut(Point, StepState),
    {
        loop {
            match self.step(grid, on_step) {
                PathFinderState::Computing => {}
                s => return s,
            }
        }
    }

    /// Cooperatively abort the search. Further steps are no-ops and the
    /// run state is left to be dropped with the finder.
    pub fn cancel(&mut self) {
        if !self.state.is_done() {
            debug!("search cancelled after {} frontier insertions", self.seq);
            self.state = PathFinderState::Cancelled;
        }
    }

    pub fn state(&self) -> &PathFinderState {
        &self.state
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }
}

fn expect_role(grid: &Grid, point: Point, expected: Role) -> Result<()> {
    match grid.cell_at(point) {
        Ok(cell) if cell.role == expected => Ok(()),
        _ => Err(Error::InvalidEndpoints { point, expected }),
    }
}

/// Run a complete search from `start` to `end` on `grid`.
///
/// `on_step` receives one notification per cell-presentation change;
/// `cancelled` is polled once after every expansion and turns the run
/// into `Cancelled` when it reports true. Callers wanting a timeout
/// wrap a deadline check in the predicate. The caller must have called
/// [`Grid::reset_search_annotations`] since the previous run.
///
/// The returned state is never `Computing`. An unreachable end is the
/// ordinary `NoPathFound` outcome, not an error.
pub fn run_search<F, C>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    mut on_step: F,
    mut cancelled: C,
) -> Result<PathFinderState>
where
    F: FnMut(Point, StepState),
    C: FnMut() -> bool,
{
    let mut finder = PathFinder::new(grid, start, end)?;

    loop {
        match finder.step(grid, &mut on_step) {
            PathFinderState::Computing => {
                if cancelled() {
                    finder.cancel();
                    return Ok(finder.state().clone());
                }
            }
            state => return Ok(state),
        }
    }
}
