//! The search configuration struct the entry points hang off.

use torgrid_core::{Grid, Point};

use crate::heuristic::Metric;
use crate::search::{Ctx, SearchError};

/// Search configuration shared by every pathfinding entry point.
///
/// All fields are plain data; build one with struct-update syntax:
///
/// ```
/// use torgrid_paths::{Metric, Pathfinder};
///
/// let pf = Pathfinder {
///     all_directional: true,
///     metric: Metric::Octile,
///     ..Pathfinder::default()
/// };
/// # let _ = pf;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pathfinder {
    /// Wrap moves end-to-end at edges and corners.
    pub wraparound: bool,
    /// Allow the four diagonal moves in addition to the cardinals.
    pub all_directional: bool,
    /// Grow a second frontier from the target and meet in the middle.
    /// Ignored by iterative deepening A*.
    pub bidirectional: bool,
    /// Distance metric for the informed searches.
    pub metric: Metric,
}

impl Pathfinder {
    /// Fail fast on caller precondition violations: a degenerate grid or
    /// endpoints outside it. Target occupancy is deliberately not checked;
    /// a search toward a blocked target simply exhausts and reports
    /// `found == false`.
    pub(crate) fn check(&self, grid: &Grid, endpoints: &[Point]) -> Result<(), SearchError> {
        if grid.rows() < 1 || grid.cols() < 1 {
            return Err(SearchError::EmptyGrid);
        }
        for &p in endpoints {
            if !grid.contains(p) {
                return Err(SearchError::OutOfBounds(p));
            }
        }
        Ok(())
    }

    pub(crate) fn ctx<'a>(&self, grid: &'a Grid) -> Ctx<'a> {
        Ctx {
            grid,
            wraparound: self.wraparound,
            all_directional: self.all_directional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchError;

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let grid = Grid::new(5, 5);
        let pf = Pathfinder::default();
        let err = pf
            .breadth_first(&grid, Point::new(0, 0), Point::new(5, 0))
            .unwrap_err();
        assert_eq!(err, SearchError::OutOfBounds(Point::new(5, 0)));
        let err = pf
            .dijkstra(&grid, Point::new(-1, 0), Point::new(1, 1))
            .unwrap_err();
        assert_eq!(err, SearchError::OutOfBounds(Point::new(-1, 0)));
    }

    #[test]
    fn rejects_empty_grid() {
        let grid = Grid::new(0, 4);
        let pf = Pathfinder::default();
        let err = pf.a_star(&grid, Point::ZERO, Point::ZERO).unwrap_err();
        assert_eq!(err, SearchError::EmptyGrid);
    }
}
