//! Fringe search.
//!
//! Keeps one ordered working list per direction instead of a priority
//! queue. Each outer pass sweeps the list against an f-cost limit:
//! nodes over the limit stay put and raise the next limit (the minimum
//! rejected f), nodes under it expand and are removed. Rediscovered
//! neighbors with a strictly better g are moved to the end of the list;
//! neighbors are pushed in reverse move order. The sweep index advances
//! without compensating for removals — an element sliding into a freed
//! slot is picked up on the next pass, not this one — and both the push
//! order and that skip decide which equal-cost path comes back.

use std::collections::{HashMap, HashSet};

use torgrid_core::{Grid, Point};

use crate::Pathfinder;
use crate::heuristic::{Metric, heuristic};
use crate::reconstruct::reconstruct_path;
use crate::search::{Ctx, SearchError, SearchResult, step_cost};

struct FringeSide {
    fringe: Vec<Point>,
    visited: HashSet<Point>,
    /// Node → (g, parent). Every fringe member has an entry.
    cache: HashMap<Point, (f64, Option<Point>)>,
    flimit: f64,
    goal: Point,
}

impl FringeSide {
    fn new(origin: Point, goal: Point, metric: Metric) -> Self {
        let mut cache = HashMap::new();
        cache.insert(origin, (0.0, None));
        Self {
            fringe: vec![origin],
            visited: HashSet::new(),
            cache,
            flimit: heuristic(origin, goal, metric),
            goal,
        }
    }

    /// Project the cache down to a plain backtrack map.
    fn parents(&self) -> HashMap<Point, Point> {
        self.cache
            .iter()
            .filter_map(|(&p, &(_, parent))| parent.map(|q| (p, q)))
            .collect()
    }
}

enum Pass {
    Met(Point),
    Limit(f64),
}

/// One sweep over a side's fringe list.
fn fringe_pass(
    ctx: &Ctx,
    side: &mut FringeSide,
    other_visited: &HashSet<Point>,
    metric: Metric,
    trace: &mut Vec<Point>,
) -> Pass {
    let mut fmin = f64::INFINITY;
    let mut i = 0;
    while i < side.fringe.len() {
        let node = side.fringe[i];
        let (g, _) = side.cache[&node];
        let f = g + heuristic(node, side.goal, metric);
        side.visited.insert(node);
        if f > side.flimit {
            fmin = fmin.min(f);
            i += 1;
            continue;
        }
        if node == side.goal || other_visited.contains(&node) {
            return Pass::Met(node);
        }
        for n in ctx.open_moves(node).into_iter().rev() {
            let g_child = g + step_cost(node, n);
            if let Some(&(g_cached, _)) = side.cache.get(&n) {
                if g_child >= g_cached {
                    continue;
                }
            }
            if let Some(pos) = side.fringe.iter().position(|&q| q == n) {
                side.fringe.remove(pos);
            }
            side.fringe.push(n);
            side.cache.insert(n, (g_child, Some(node)));
            trace.push(n);
        }
        if let Some(pos) = side.fringe.iter().position(|&q| q == node) {
            side.fringe.remove(pos);
        }
        i += 1;
    }
    Pass::Limit(fmin)
}

impl Pathfinder {
    /// Fringe search from `start` to `target` under the configured
    /// metric.
    pub fn fringe_search(
        &self,
        grid: &Grid,
        start: Point,
        target: Point,
    ) -> Result<SearchResult, SearchError> {
        self.check(grid, &[start, target])?;
        let ctx = self.ctx(grid);
        let mut trace = Vec::new();
        let mut fwd = FringeSide::new(start, target, self.metric);
        let mut met = None;

        if self.bidirectional {
            let mut bwd = FringeSide::new(target, start, self.metric);
            while met.is_none() && (!fwd.fringe.is_empty() || !bwd.fringe.is_empty()) {
                match fringe_pass(&ctx, &mut fwd, &bwd.visited, self.metric, &mut trace) {
                    Pass::Met(m) => met = Some(m),
                    Pass::Limit(l) => fwd.flimit = l,
                }
                if met.is_none() {
                    match fringe_pass(&ctx, &mut bwd, &fwd.visited, self.metric, &mut trace) {
                        Pass::Met(m) => met = Some(m),
                        Pass::Limit(l) => bwd.flimit = l,
                    }
                }
            }
            Ok(match met {
                Some(m) => SearchResult {
                    path: reconstruct_path(m, &fwd.parents(), Some(&bwd.parents())),
                    visited: trace,
                    found: true,
                },
                None => SearchResult {
                    path: Vec::new(),
                    visited: trace,
                    found: false,
                },
            })
        } else {
            while met.is_none() && !fwd.fringe.is_empty() {
                match fringe_pass(&ctx, &mut fwd, &HashSet::new(), self.metric, &mut trace) {
                    Pass::Met(m) => met = Some(m),
                    Pass::Limit(l) => fwd.flimit = l,
                }
            }
            Ok(match met {
                Some(m) => SearchResult {
                    path: reconstruct_path(m, &fwd.parents(), None),
                    visited: trace,
                    found: true,
                },
                None => SearchResult {
                    path: Vec::new(),
                    visited: trace,
                    found: false,
                },
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use torgrid_core::Cell;

    #[test]
    fn optimal_on_open_grid_with_exact_metric() {
        let grid = Grid::new(5, 5);
        let pf = Pathfinder {
            metric: Metric::Manhattan,
            ..Pathfinder::default()
        };
        let res = pf
            .fringe_search(&grid, Point::new(0, 0), Point::new(4, 4))
            .unwrap();
        assert!(res.found);
        assert_eq!(res.path.len(), 9);
        assert_eq!(res.path[0], Point::new(0, 0));
        assert_eq!(*res.path.last().unwrap(), Point::new(4, 4));
    }

    #[test]
    fn routes_around_walls() {
        let grid = Grid::from_fn(5, 5, |p| {
            if p.y == 2 && p.x != 4 {
                Cell::WALL
            } else {
                Cell::FREE
            }
        });
        let pf = Pathfinder {
            metric: Metric::Manhattan,
            ..Pathfinder::default()
        };
        let res = pf
            .fringe_search(&grid, Point::new(0, 0), Point::new(0, 4))
            .unwrap();
        assert!(res.found);
        assert_eq!(res.path.len(), 13);
        assert!(res.path.contains(&Point::new(4, 2)));
    }

    #[test]
    fn bidirectional_joins_a_valid_path() {
        let grid = Grid::new(5, 5);
        let pf = Pathfinder {
            bidirectional: true,
            metric: Metric::Manhattan,
            ..Pathfinder::default()
        };
        let res = pf
            .fringe_search(&grid, Point::new(0, 0), Point::new(4, 4))
            .unwrap();
        assert!(res.found);
        assert_eq!(res.path[0], Point::new(0, 0));
        assert_eq!(*res.path.last().unwrap(), Point::new(4, 4));
        for w in res.path.windows(2) {
            let d = w[1] - w[0];
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && (d.x != 0 || d.y != 0));
        }
    }

    #[test]
    fn start_equals_target_is_a_trivial_meet() {
        let grid = Grid::new(3, 3);
        let pf = Pathfinder::default();
        let res = pf
            .fringe_search(&grid, Point::new(1, 1), Point::new(1, 1))
            .unwrap();
        assert!(res.found);
        assert_eq!(res.path, vec![Point::new(1, 1)]);
    }

    #[test]
    fn unreachable_target_exhausts() {
        let mut grid = Grid::new(3, 3);
        grid.set(Point::new(0, 1), Cell::WALL);
        grid.set(Point::new(1, 1), Cell::WALL);
        grid.set(Point::new(1, 0), Cell::WALL);
        let pf = Pathfinder::default();
        let res = pf
            .fringe_search(&grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert!(!res.found);
        assert!(res.path.is_empty());
    }
}
