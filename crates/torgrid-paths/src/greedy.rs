//! Greedy best-first search.

use std::collections::HashSet;

use torgrid_core::{Grid, Point};

use crate::Pathfinder;
use crate::frontier::{Frontier, MinHeap};
use crate::heuristic::{Metric, heuristic};
use crate::search::{Ctx, Policy, SearchError, SearchResult, Side, drive, step_cost};

/// Priority is the local step cost plus the heuristic to the goal — no
/// accumulated g, which is what makes it greedy.
struct Greedy {
    metric: Metric,
}

impl Policy for Greedy {
    type Frontier = MinHeap;

    fn seed(&self, side: &mut Side<MinHeap>) {
        side.visited.insert(side.origin);
        side.frontier.push(side.origin, 0.0);
    }

    fn expand(
        &self,
        ctx: &Ctx,
        side: &mut Side<MinHeap>,
        other_visited: &HashSet<Point>,
        trace: &mut Vec<Point>,
    ) -> Option<Point> {
        let (current, _) = side.frontier.pop()?;
        for n in ctx.open_moves(current) {
            if side.visited.contains(&n) {
                continue;
            }
            side.visited.insert(n);
            side.backtrack.insert(n, current);
            trace.push(n);
            let cost = step_cost(current, n);
            side.frontier
                .push(n, cost + heuristic(n, side.goal, self.metric));
            if n == side.goal || other_visited.contains(&n) {
                return Some(n);
            }
        }
        None
    }
}

impl Pathfinder {
    /// Greedy best-first search from `start` to `target`. Fast and
    /// heuristic-driven; the returned path carries no optimality claim.
    pub fn greedy_best_first(
        &self,
        grid: &Grid,
        start: Point,
        target: Point,
    ) -> Result<SearchResult, SearchError> {
        self.check(grid, &[start, target])?;
        Ok(drive(
            &Greedy {
                metric: self.metric,
            },
            &self.ctx(grid),
            start,
            target,
            self.bidirectional,
        ))
    }
}
