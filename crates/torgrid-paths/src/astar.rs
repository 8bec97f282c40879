//! A* search.

use std::collections::HashSet;

use torgrid_core::{Grid, Point};

use crate::Pathfinder;
use crate::frontier::{Frontier, MinHeap};
use crate::heuristic::{Metric, heuristic};
use crate::search::{Ctx, Policy, SearchError, SearchResult, Side, drive, step_cost};

/// Classic g-score relaxation: priority is g + h, only strictly-improving
/// neighbors are pushed.
struct AStar {
    metric: Metric,
}

impl Policy for AStar {
    type Frontier = MinHeap;

    fn seed(&self, side: &mut Side<MinHeap>) {
        side.dist.insert(side.origin, 0.0);
        side.frontier
            .push(side.origin, heuristic(side.origin, side.goal, self.metric));
    }

    fn expand(
        &self,
        ctx: &Ctx,
        side: &mut Side<MinHeap>,
        other_visited: &HashSet<Point>,
        trace: &mut Vec<Point>,
    ) -> Option<Point> {
        let (current, _) = side.frontier.pop()?;
        side.visited.insert(current);
        let g = side.dist_of(current);
        for n in ctx.open_moves(current) {
            let assumed = g + step_cost(current, n);
            if assumed < side.dist_of(n) {
                side.dist.insert(n, assumed);
                side.backtrack.insert(n, current);
                trace.push(n);
                side.frontier
                    .push(n, assumed + heuristic(n, side.goal, self.metric));
            }
            if n == side.goal || other_visited.contains(&n) {
                return Some(n);
            }
        }
        None
    }
}

impl Pathfinder {
    /// A* search from `start` to `target` under the configured metric.
    /// Optimal for the admissible metrics; [`Metric::Hamming`] callers
    /// accept whatever comes back.
    pub fn a_star(
        &self,
        grid: &Grid,
        start: Point,
        target: Point,
    ) -> Result<SearchResult, SearchError> {
        self.check(grid, &[start, target])?;
        Ok(drive(
            &AStar {
                metric: self.metric,
            },
            &self.ctx(grid),
            start,
            target,
            self.bidirectional,
        ))
    }
}
