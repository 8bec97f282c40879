//! Weighted random wandering.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::IndexedRandom;
use torgrid_core::{Grid, Point, diagonal_adjusted};

use crate::Pathfinder;
use crate::search::SearchError;

impl Pathfinder {
    /// Pick one random legal move out of `start`: a free, non-corner-
    /// cutting neighbor, with cardinal steps weighted 0.8 and diagonal
    /// steps 0.2 (the split only matters with `all_directional` on).
    ///
    /// Returns `Ok(None)` when every neighbor is blocked. The
    /// `bidirectional` and `metric` settings are irrelevant here.
    pub fn random_step<R: Rng>(
        &self,
        grid: &Grid,
        start: Point,
        rng: &mut R,
    ) -> Result<Option<Point>, SearchError> {
        self.check(grid, &[start])?;
        let (rows, cols) = (grid.rows(), grid.cols());
        let moves = self.ctx(grid).open_moves(start);

        // Weights are keyed by the seam-adjusted landing cell of each of
        // the eight raw offsets, so wrapped moves find their weight too.
        let (x, y) = (start.x, start.y);
        let offsets = [
            (Point::new(x - 1, y - 1), 0.2),
            (Point::new(x - 1, y), 0.8),
            (Point::new(x - 1, y + 1), 0.2),
            (Point::new(x, y - 1), 0.8),
            (Point::new(x, y + 1), 0.8),
            (Point::new(x + 1, y - 1), 0.2),
            (Point::new(x + 1, y), 0.8),
            (Point::new(x + 1, y + 1), 0.2),
        ];
        let mut weight_of = HashMap::new();
        for (to, w) in offsets {
            weight_of.insert(diagonal_adjusted(start, to, rows, cols), w);
        }

        let weighted: Vec<(Point, f64)> = moves
            .into_iter()
            .map(|m| (m, weight_of.get(&m).copied().unwrap_or(0.8)))
            .collect();
        Ok(weighted
            .choose_weighted(rng, |&(_, w)| w)
            .ok()
            .map(|&(p, _)| p))
    }
}
