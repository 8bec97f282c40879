//! Dijkstra's algorithm.

use std::collections::HashSet;

use torgrid_core::{Grid, Point};

use crate::Pathfinder;
use crate::frontier::{Frontier, MinHeap};
use crate::search::{Ctx, Policy, SearchError, SearchResult, Side, drive, step_cost};

/// Uniform-cost expansion: relax strictly-improving neighbors from the
/// distance a node was popped with. Stale heap entries re-relax from
/// their stale distance and simply fail the improvement test.
struct Dijkstra;

impl Policy for Dijkstra {
    type Frontier = MinHeap;

    fn seed(&self, side: &mut Side<MinHeap>) {
        side.dist.insert(side.origin, 0.0);
        side.frontier.push(side.origin, 0.0);
    }

    fn expand(
        &self,
        ctx: &Ctx,
        side: &mut Side<MinHeap>,
        other_visited: &HashSet<Point>,
        trace: &mut Vec<Point>,
    ) -> Option<Point> {
        let (current, dist) = side.frontier.pop()?;
        side.visited.insert(current);
        for n in ctx.open_moves(current) {
            let cost = dist + step_cost(current, n);
            if cost < side.dist_of(n) {
                side.dist.insert(n, cost);
                side.backtrack.insert(n, current);
                trace.push(n);
                side.frontier.push(n, cost);
            }
            if n == side.goal || other_visited.contains(&n) {
                return Some(n);
            }
        }
        None
    }
}

impl Pathfinder {
    /// Dijkstra's shortest-path search from `start` to `target`, with
    /// step costs of 1 (cardinal) and √2 (diagonal).
    pub fn dijkstra(
        &self,
        grid: &Grid,
        start: Point,
        target: Point,
    ) -> Result<SearchResult, SearchError> {
        self.check(grid, &[start, target])?;
        Ok(drive(
            &Dijkstra,
            &self.ctx(grid),
            start,
            target,
            self.bidirectional,
        ))
    }
}
