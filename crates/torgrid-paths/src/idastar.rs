//! Iterative deepening A*.
//!
//! Repeated depth-first probes under an f-cost bound; each failed probe
//! raises the bound to the minimum f that exceeded it. The recursion is
//! run on an explicit frame stack, so grid size is limited by memory
//! rather than the host call stack.
//!
//! Two deliberate departures from the other searches: steps cost one hop
//! regardless of direction, and diagonal moves are not checked for
//! corner cutting — only occupancy and the current probe path gate a
//! move.

use torgrid_core::{Grid, Point};

use crate::Pathfinder;
use crate::heuristic::{Metric, heuristic};
use crate::search::{Ctx, SearchError, SearchResult};

enum Probe {
    Found,
    /// Smallest f that exceeded the bound; infinite when the probe
    /// exhausted every reachable branch.
    Next(f64),
}

/// One bounded depth-first probe. `path` starts as `[start]` and, on
/// `Found`, holds the full route.
fn probe(
    ctx: &Ctx,
    target: Point,
    metric: Metric,
    bound: f64,
    path: &mut Vec<Point>,
    trace: &mut Vec<Point>,
) -> Probe {
    // One frame per path cell: its candidate moves, cheapest first, and a
    // cursor into them.
    let mut frames: Vec<(Vec<Point>, usize)> = Vec::new();
    let mut min_next = f64::INFINITY;
    let mut evaluate = true;

    loop {
        if evaluate {
            let Some(&current) = path.last() else {
                return Probe::Next(min_next);
            };
            let g = (path.len() - 1) as f64;
            let f = g + heuristic(current, target, metric);
            if f > bound {
                min_next = min_next.min(f);
                path.pop();
                if path.is_empty() {
                    return Probe::Next(min_next);
                }
                evaluate = false;
                continue;
            }
            if current == target {
                return Probe::Found;
            }
            let mut moves = ctx.moves(current);
            moves.sort_by(|a, b| {
                let fa = g + 1.0 + heuristic(*a, target, metric);
                let fb = g + 1.0 + heuristic(*b, target, metric);
                fa.total_cmp(&fb).then_with(|| a.cmp(b))
            });
            frames.push((moves, 0));
            evaluate = false;
            continue;
        }

        let Some((moves, cursor)) = frames.last_mut() else {
            return Probe::Next(min_next);
        };
        let mut descended = false;
        while *cursor < moves.len() {
            let n = moves[*cursor];
            *cursor += 1;
            if ctx.grid.is_free(n) && !path.contains(&n) {
                path.push(n);
                trace.push(n);
                evaluate = true;
                descended = true;
                break;
            }
        }
        if descended {
            continue;
        }
        frames.pop();
        path.pop();
        if path.is_empty() {
            return Probe::Next(min_next);
        }
    }
}

impl Pathfinder {
    /// Iterative deepening A* from `start` to `target`.
    ///
    /// Ignores the `bidirectional` flag. Runtime grows steeply with open
    /// area — the probes re-walk the tree once per bound — so callers
    /// that cannot tolerate a stall must run this under an external
    /// timeout and treat a kill as "no result", not a failure of the
    /// grid. On failure the path is the lone start cell.
    pub fn iterative_deepening_a_star(
        &self,
        grid: &Grid,
        start: Point,
        target: Point,
    ) -> Result<SearchResult, SearchError> {
        self.check(grid, &[start, target])?;
        let ctx = self.ctx(grid);
        let mut trace = Vec::new();
        let mut bound = heuristic(start, target, self.metric);
        let mut path = vec![start];
        loop {
            match probe(&ctx, target, self.metric, bound, &mut path, &mut trace) {
                Probe::Found => {
                    return Ok(SearchResult {
                        path,
                        visited: trace,
                        found: true,
                    });
                }
                Probe::Next(next) if next.is_finite() => {
                    bound = next;
                    path.clear();
                    path.push(start);
                }
                Probe::Next(_) => {
                    return Ok(SearchResult {
                        path: vec![start],
                        visited: trace,
                        found: false,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use torgrid_core::Cell;

    #[test]
    fn direct_route_on_open_grid() {
        let grid = Grid::new(3, 3);
        let pf = Pathfinder {
            metric: Metric::Manhattan,
            ..Pathfinder::default()
        };
        let res = pf
            .iterative_deepening_a_star(&grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert!(res.found);
        assert_eq!(res.path.len(), 5);
        assert_eq!(res.path[0], Point::new(0, 0));
        assert_eq!(*res.path.last().unwrap(), Point::new(2, 2));
    }

    #[test]
    fn start_equals_target_is_trivially_found() {
        let grid = Grid::new(3, 3);
        let pf = Pathfinder::default();
        let res = pf
            .iterative_deepening_a_star(&grid, Point::new(1, 1), Point::new(1, 1))
            .unwrap();
        assert!(res.found);
        assert_eq!(res.path, vec![Point::new(1, 1)]);
    }

    #[test]
    fn unreachable_target_returns_lone_start() {
        let mut grid = Grid::new(3, 3);
        for p in [Point::new(0, 1), Point::new(1, 0), Point::new(1, 1)] {
            grid.set(p, Cell::WALL);
        }
        let pf = Pathfinder::default();
        let res = pf
            .iterative_deepening_a_star(&grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert!(!res.found);
        assert_eq!(res.path, vec![Point::new(0, 0)]);
    }

    #[test]
    fn squeezes_through_corners_other_searches_reject() {
        // Walls pinch the diagonal between start and target. The probe
        // only checks occupancy, so the corner-cutting step goes through
        // where A* reports no path.
        let mut grid = Grid::new(3, 3);
        grid.set(Point::new(0, 1), Cell::WALL);
        grid.set(Point::new(1, 0), Cell::WALL);
        grid.set(Point::new(2, 1), Cell::WALL);
        grid.set(Point::new(1, 2), Cell::WALL);
        let pf = Pathfinder {
            all_directional: true,
            ..Pathfinder::default()
        };
        let astar = pf.a_star(&grid, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert!(!astar.found);
        let ida = pf
            .iterative_deepening_a_star(&grid, Point::new(0, 0), Point::new(1, 1))
            .unwrap();
        assert!(ida.found);
        assert_eq!(ida.path, vec![Point::new(0, 0), Point::new(1, 1)]);
    }

    #[test]
    fn routes_around_a_wall() {
        let mut grid = Grid::new(4, 4);
        for x in 0..3 {
            grid.set(Point::new(x, 2), Cell::WALL);
        }
        let pf = Pathfinder {
            metric: Metric::Manhattan,
            ..Pathfinder::default()
        };
        let res = pf
            .iterative_deepening_a_star(&grid, Point::new(0, 0), Point::new(0, 3))
            .unwrap();
        assert!(res.found);
        assert_eq!(res.path[0], Point::new(0, 0));
        assert_eq!(*res.path.last().unwrap(), Point::new(0, 3));
        assert!(res.path.contains(&Point::new(3, 2)));
        // Detour down and back: 9 hops minimum.
        assert_eq!(res.path.len(), 10);
    }
}
