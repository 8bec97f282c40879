//! Queue-based Bellman-Ford relaxation.
//!
//! Grid edges carry no negative weights, so the classic negative-cycle
//! detection pass is pointless here and omitted; what remains is a
//! breadth-ordered relaxation queue. Like the other cost-oblivious
//! searches, every edge counts as one hop — diagonal moves get no extra
//! weight.

use std::collections::HashSet;

use torgrid_core::{Grid, Point};

use crate::Pathfinder;
use crate::frontier::{Fifo, Frontier};
use crate::search::{Ctx, Policy, SearchError, SearchResult, Side, drive};

struct BellmanFord;

impl Policy for BellmanFord {
    type Frontier = Fifo;

    fn seed(&self, side: &mut Side<Fifo>) {
        side.dist.insert(side.origin, 0.0);
        side.frontier.push(side.origin, 0.0);
    }

    fn expand(
        &self,
        ctx: &Ctx,
        side: &mut Side<Fifo>,
        other_visited: &HashSet<Point>,
        trace: &mut Vec<Point>,
    ) -> Option<Point> {
        let (u, _) = side.frontier.pop()?;
        side.visited.insert(u);
        let du = side.dist_of(u);
        for v in ctx.open_moves(u) {
            if du + 1.0 < side.dist_of(v) {
                side.dist.insert(v, du + 1.0);
                side.backtrack.insert(v, u);
                side.frontier.push(v, 0.0);
                trace.push(v);
            }
            if v == side.goal || other_visited.contains(&v) {
                return Some(v);
            }
        }
        None
    }
}

impl Pathfinder {
    /// Bellman-Ford relaxation from `start` to `target`. Hop-counting
    /// like [`breadth_first`](Pathfinder::breadth_first), but cells may
    /// be re-queued whenever a shorter hop count is found.
    pub fn bellman_ford(
        &self,
        grid: &Grid,
        start: Point,
        target: Point,
    ) -> Result<SearchResult, SearchError> {
        self.check(grid, &[start, target])?;
        Ok(drive(
            &BellmanFord,
            &self.ctx(grid),
            start,
            target,
            self.bidirectional,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use torgrid_core::Cell;

    #[test]
    fn hop_count_matches_bfs() {
        let grid = Grid::from_fn(5, 5, |p| {
            if p.y == 2 && p.x != 4 {
                Cell::WALL
            } else {
                Cell::FREE
            }
        });
        let pf = Pathfinder::default();
        let bf = pf
            .bellman_ford(&grid, Point::new(0, 0), Point::new(0, 4))
            .unwrap();
        let bfs = pf
            .breadth_first(&grid, Point::new(0, 0), Point::new(0, 4))
            .unwrap();
        assert!(bf.found);
        assert_eq!(bf.path.len(), bfs.path.len());
        assert!(bf.path.contains(&Point::new(4, 2)));
    }

    #[test]
    fn diagonal_edges_count_one_hop() {
        let grid = Grid::new(3, 3);
        let pf = Pathfinder {
            all_directional: true,
            ..Pathfinder::default()
        };
        let res = pf
            .bellman_ford(&grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert!(res.found);
        // Two diagonal hops; no √2 weighting applies.
        assert_eq!(res.path.len(), 3);
    }

    #[test]
    fn unreachable_target_exhausts() {
        let mut grid = Grid::new(3, 3);
        grid.set(Point::new(0, 1), Cell::WALL);
        grid.set(Point::new(1, 1), Cell::WALL);
        grid.set(Point::new(1, 0), Cell::WALL);
        let pf = Pathfinder::default();
        let res = pf
            .bellman_ford(&grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert!(!res.found);
        assert!(res.path.is_empty());
    }
}
