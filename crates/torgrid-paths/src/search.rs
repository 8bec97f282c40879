//! The shared bidirectional search driver.
//!
//! Every driver-based algorithm is a [`Policy`]: a frontier discipline
//! plus one expansion step. [`drive`] owns the per-side state, alternates
//! one expansion per side in bidirectional mode, stops when a side
//! exhausts, and replays the backtrack maps into a path on meeting.

use std::collections::{HashMap, HashSet};
use std::f64::consts::SQRT_2;
use std::fmt;

use torgrid_core::{Grid, Point, check_diagonal_crossing, valid_moves};

use crate::frontier::Frontier;
use crate::reconstruct::reconstruct_path;

/// Outcome of a pathfinding call.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells from start to target in travel order. Empty — or the lone
    /// start cell for iterative deepening — when no path was found.
    pub path: Vec<Point>,
    /// Every cell in the order it was discovered. Diagnostic only; a
    /// consumer may replay it to animate the search.
    pub visited: Vec<Point>,
    /// Whether the search connected start and target.
    pub found: bool,
}

/// Invalid-input errors. An unreachable target is not an error — it comes
/// back as a [`SearchResult`] with `found == false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The grid has a zero dimension.
    EmptyGrid,
    /// An endpoint lies outside the grid.
    OutOfBounds(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyGrid => write!(f, "grid has a zero dimension"),
            SearchError::OutOfBounds(p) => write!(f, "coordinate {p} is outside the grid"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Step cost between two already-adjusted coordinates: 1 when the move
/// keeps a row or column, √2 otherwise.
pub(crate) fn step_cost(from: Point, to: Point) -> f64 {
    if from.x == to.x || from.y == to.y {
        1.0
    } else {
        SQRT_2
    }
}

/// Per-call move context.
pub(crate) struct Ctx<'a> {
    pub grid: &'a Grid,
    pub wraparound: bool,
    pub all_directional: bool,
}

impl Ctx<'_> {
    /// Raw wrap-adjusted moves, ignoring occupancy.
    pub fn moves(&self, from: Point) -> Vec<Point> {
        valid_moves(
            from,
            self.grid.rows(),
            self.grid.cols(),
            self.wraparound,
            self.all_directional,
        )
    }

    /// Moves into free cells that do not cut a wall corner.
    pub fn open_moves(&self, from: Point) -> Vec<Point> {
        self.moves(from)
            .into_iter()
            .filter(|&n| self.grid.is_free(n) && !check_diagonal_crossing(from, n, self.grid))
            .collect()
    }
}

/// One direction of a (possibly bidirectional) search.
pub(crate) struct Side<F> {
    pub frontier: F,
    pub visited: HashSet<Point>,
    /// Cell → predecessor. The side's origin has no entry.
    pub backtrack: HashMap<Point, Point>,
    /// Best known cost per cell, for the policies that track one.
    pub dist: HashMap<Point, f64>,
    pub origin: Point,
    pub goal: Point,
}

impl<F: Frontier> Side<F> {
    fn new(origin: Point, goal: Point) -> Self {
        Self {
            frontier: F::default(),
            visited: HashSet::new(),
            backtrack: HashMap::new(),
            dist: HashMap::new(),
            origin,
            goal,
        }
    }

    /// Best known cost of `p`, infinity when unseen.
    pub fn dist_of(&self, p: Point) -> f64 {
        self.dist.get(&p).copied().unwrap_or(f64::INFINITY)
    }
}

/// One search algorithm, expressed as its frontier discipline plus a
/// single expansion step.
pub(crate) trait Policy {
    type Frontier: Frontier;

    /// Prime a side's frontier (and whatever bookkeeping the algorithm
    /// needs) with its origin.
    fn seed(&self, side: &mut Side<Self::Frontier>);

    /// Expand one node from `side`. Newly discovered cells go into
    /// `trace` in discovery order. Returns the meeting cell as soon as a
    /// neighbor equals the side's goal or was already visited by the
    /// opposite side.
    fn expand(
        &self,
        ctx: &Ctx,
        side: &mut Side<Self::Frontier>,
        other_visited: &HashSet<Point>,
        trace: &mut Vec<Point>,
    ) -> Option<Point>;
}

/// Run a policy from `start` toward `target`, optionally growing a second
/// frontier backward from the target, one expansion per side per turn.
pub(crate) fn drive<P: Policy>(
    policy: &P,
    ctx: &Ctx,
    start: Point,
    target: Point,
    bidirectional: bool,
) -> SearchResult {
    let mut fwd = Side::<P::Frontier>::new(start, target);
    policy.seed(&mut fwd);
    let mut trace = Vec::new();
    let mut met = None;

    if bidirectional {
        let mut bwd = Side::<P::Frontier>::new(target, start);
        policy.seed(&mut bwd);
        while met.is_none() && !fwd.frontier.is_empty() && !bwd.frontier.is_empty() {
            met = policy.expand(ctx, &mut fwd, &bwd.visited, &mut trace);
            if met.is_none() {
                met = policy.expand(ctx, &mut bwd, &fwd.visited, &mut trace);
            }
        }
        finish(met, &fwd.backtrack, Some(&bwd.backtrack), trace)
    } else {
        let no_other = HashSet::new();
        while met.is_none() && !fwd.frontier.is_empty() {
            met = policy.expand(ctx, &mut fwd, &no_other, &mut trace);
        }
        finish(met, &fwd.backtrack, None, trace)
    }
}

fn finish(
    met: Option<Point>,
    forward: &HashMap<Point, Point>,
    backward: Option<&HashMap<Point, Point>>,
    visited: Vec<Point>,
) -> SearchResult {
    match met {
        Some(m) => SearchResult {
            path: reconstruct_path(m, forward, backward),
            visited,
            found: true,
        },
        None => SearchResult {
            path: Vec::new(),
            visited,
            found: false,
        },
    }
}
