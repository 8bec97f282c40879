//! Depth-first and breadth-first search.
//!
//! The two share one cost-oblivious policy and differ only in frontier
//! discipline: a stack explores depth first, a queue breadth first. Both
//! count every edge as a single hop — diagonal moves get no extra weight
//! even when enabled — so "best" means fewest hops, not shortest
//! geometric distance.

use std::collections::HashSet;
use std::marker::PhantomData;

use torgrid_core::{Grid, Point};

use crate::Pathfinder;
use crate::frontier::{Fifo, Frontier, Lifo};
use crate::search::{Ctx, Policy, SearchError, SearchResult, Side, drive};

struct Uninformed<F>(PhantomData<F>);

impl<F: Frontier> Policy for Uninformed<F> {
    type Frontier = F;

    fn seed(&self, side: &mut Side<F>) {
        side.visited.insert(side.origin);
        side.frontier.push(side.origin, 0.0);
    }

    fn expand(
        &self,
        ctx: &Ctx,
        side: &mut Side<F>,
        other_visited: &HashSet<Point>,
        trace: &mut Vec<Point>,
    ) -> Option<Point> {
        let (current, _) = side.frontier.pop()?;
        for n in ctx.open_moves(current) {
            if side.visited.contains(&n) {
                continue;
            }
            side.visited.insert(n);
            side.frontier.push(n, 0.0);
            side.backtrack.insert(n, current);
            trace.push(n);
            if n == side.goal || other_visited.contains(&n) {
                return Some(n);
            }
        }
        None
    }
}

impl Pathfinder {
    /// Depth-first search from `start` to `target`. Finds some path, not
    /// a shortest one; cells are visited at most once.
    pub fn depth_first(
        &self,
        grid: &Grid,
        start: Point,
        target: Point,
    ) -> Result<SearchResult, SearchError> {
        self.check(grid, &[start, target])?;
        Ok(drive(
            &Uninformed::<Lifo>(PhantomData),
            &self.ctx(grid),
            start,
            target,
            self.bidirectional,
        ))
    }

    /// Breadth-first search from `start` to `target`. Returns a
    /// fewest-hops path.
    pub fn breadth_first(
        &self,
        grid: &Grid,
        start: Point,
        target: Point,
    ) -> Result<SearchResult, SearchError> {
        self.check(grid, &[start, target])?;
        Ok(drive(
            &Uninformed::<Fifo>(PhantomData),
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
    use std::collections::HashSet;
    use torgrid_core::Cell;

    /// 5×5 grid with a wall down column 2, except a gap at row 4.
    fn wall_column_grid() -> Grid {
        Grid::from_fn(5, 5, |p| {
            if p.y == 2 && p.x != 4 {
                Cell::WALL
            } else {
                Cell::FREE
            }
        })
    }

    fn assert_no_revisit(visited: &[Point]) {
        let unique: HashSet<_> = visited.iter().collect();
        assert_eq!(unique.len(), visited.len(), "trace revisits a cell");
    }

    fn assert_steps_adjacent(path: &[Point]) {
        for w in path.windows(2) {
            let d = w[1] - w[0];
            assert!(
                d.x.abs() <= 1 && d.y.abs() <= 1 && (d.x != 0 || d.y != 0),
                "non-adjacent step {} -> {}",
                w[0],
                w[1]
            );
        }
    }

    #[test]
    fn bfs_routes_through_the_gap() {
        let grid = wall_column_grid();
        let pf = Pathfinder::default();
        let res = pf
            .breadth_first(&grid, Point::new(0, 0), Point::new(0, 4))
            .unwrap();
        assert!(res.found);
        // Down to the gap, across, back up: 12 hops, 13 cells.
        assert_eq!(res.path.len(), 13);
        assert!(res.path.contains(&Point::new(4, 2)));
        assert_eq!(res.path[0], Point::new(0, 0));
        assert_eq!(res.path[12], Point::new(0, 4));
        assert_steps_adjacent(&res.path);
        assert_no_revisit(&res.visited);
    }

    #[test]
    fn bfs_with_diagonals_still_counts_hops() {
        let grid = wall_column_grid();
        let pf = Pathfinder {
            all_directional: true,
            ..Pathfinder::default()
        };
        let res = pf
            .breadth_first(&grid, Point::new(0, 0), Point::new(0, 4))
            .unwrap();
        assert!(res.found);
        // Fewest hops through the gap is 8, so 9 cells; diagonal cost
        // weighting is deliberately ignored.
        assert_eq!(res.path.len(), 9);
        assert!(res.path.contains(&Point::new(4, 2)));
        assert_steps_adjacent(&res.path);
    }

    #[test]
    fn dfs_finds_some_path() {
        let grid = wall_column_grid();
        let pf = Pathfinder::default();
        let res = pf
            .depth_first(&grid, Point::new(0, 0), Point::new(0, 4))
            .unwrap();
        assert!(res.found);
        assert_eq!(res.path[0], Point::new(0, 0));
        assert_eq!(*res.path.last().unwrap(), Point::new(0, 4));
        assert!(res.path.contains(&Point::new(4, 2)));
        assert_steps_adjacent(&res.path);
        assert_no_revisit(&res.visited);
    }

    #[test]
    fn bidirectional_bfs_meets_in_the_middle() {
        let grid = Grid::new(5, 5);
        let pf = Pathfinder {
            bidirectional: true,
            ..Pathfinder::default()
        };
        let res = pf
            .breadth_first(&grid, Point::new(0, 0), Point::new(4, 4))
            .unwrap();
        assert!(res.found);
        assert_eq!(res.path[0], Point::new(0, 0));
        assert_eq!(*res.path.last().unwrap(), Point::new(4, 4));
        assert_steps_adjacent(&res.path);
    }

    #[test]
    fn walled_off_target_reports_not_found() {
        let mut grid = Grid::new(5, 5);
        for p in [
            Point::new(1, 3),
            Point::new(1, 4),
            Point::new(2, 3),
            Point::new(3, 3),
            Point::new(3, 4),
        ] {
            grid.set(p, Cell::WALL);
        }
        let pf = Pathfinder::default();
        let res = pf
            .breadth_first(&grid, Point::new(0, 0), Point::new(2, 4))
            .unwrap();
        assert!(!res.found);
        assert!(res.path.is_empty());
        assert!(!res.visited.is_empty());
    }

    #[test]
    fn start_equals_target_exhausts_without_meeting() {
        // Nothing special-cases a zero-length request: the frontier
        // explores the whole component and reports not found.
        let grid = Grid::new(3, 3);
        let pf = Pathfinder::default();
        for res in [
            pf.breadth_first(&grid, Point::new(1, 1), Point::new(1, 1))
                .unwrap(),
            pf.depth_first(&grid, Point::new(1, 1), Point::new(1, 1))
                .unwrap(),
        ] {
            assert!(!res.found);
            assert!(res.path.is_empty());
        }
    }

    #[test]
    fn wraparound_shortcuts_across_the_seam() {
        let grid = Grid::new(5, 5);
        let pf = Pathfinder {
            wraparound: true,
            ..Pathfinder::default()
        };
        let res = pf
            .breadth_first(&grid, Point::new(0, 0), Point::new(0, 4))
            .unwrap();
        assert!(res.found);
        // One westward hop across the seam.
        assert_eq!(res.path.len(), 2);
    }
}
