//! The wrap-aware move model.
//!
//! [`valid_moves`] enumerates the neighbors of a cell in a fixed order:
//! the four cardinals `[N, W, E, S]`, then the diagonals
//! `[NW, NE, SW, SE]` when 8-way movement is on. The order is part of the
//! contract — greedy and priority frontiers break ties by it.
//!
//! With wraparound off, out-of-bounds neighbors are dropped. With it on,
//! every neighbor goes through [`diagonal_adjusted`]: cardinal steps wrap
//! by plain modulo, while a diagonal step crossing an edge is redirected
//! so the seam is traversed consistently — whether the step slides along
//! the far edge or flips across the grid depends on which side of the
//! opposite axis' midpoint it starts from. The arithmetic mixes row and
//! column counts per direction, so the mapping is self-inverse only on
//! square grids.

use crate::geom::Point;
use crate::grid::Grid;

/// Neighbors of `p` in stable order, pruned to the grid when `wraparound`
/// is off and seam-corrected when it is on.
pub fn valid_moves(
    p: Point,
    rows: i32,
    cols: i32,
    wraparound: bool,
    all_directional: bool,
) -> Vec<Point> {
    let mut moves = vec![
        Point::new(p.x - 1, p.y),
        Point::new(p.x, p.y - 1),
        Point::new(p.x, p.y + 1),
        Point::new(p.x + 1, p.y),
    ];
    if all_directional {
        moves.extend([
            Point::new(p.x - 1, p.y - 1),
            Point::new(p.x - 1, p.y + 1),
            Point::new(p.x + 1, p.y - 1),
            Point::new(p.x + 1, p.y + 1),
        ]);
    }
    if !wraparound {
        moves.retain(|m| m.x >= 0 && m.x < rows && m.y >= 0 && m.y < cols);
        return moves;
    }
    moves
        .into_iter()
        .map(|m| diagonal_adjusted(p, m, rows, cols))
        .collect()
}

/// Correct a single step from `from` to the tentative target `to` for
/// edge wrapping.
///
/// Cardinal steps reduce to modulo arithmetic. Each diagonal direction
/// carries its own edge and corner cases: leaving across the row edge
/// before the column midpoint slides the step along the far edge, past
/// the midpoint it flips across the grid, and leaving across the column
/// edge transposes the coordinate onto the opposite side.
pub fn diagonal_adjusted(from: Point, to: Point, rows: i32, cols: i32) -> Point {
    let (x1, y1) = (from.x, from.y);
    let (mut x2, mut y2) = (to.x, to.y);
    let (dx, dy) = (x2 - x1, y2 - y1);
    if dx == 1 && dy == 1 {
        // south-east
        if x1 == rows - 1 {
            if 2 * y1 > cols {
                y2 += rows;
            } else {
                x2 = cols / 2 - y1 - 1;
                y2 = 0;
            }
        } else if y1 == cols - 1 {
            y2 = cols - x1 - 1;
            x2 = 0;
        }
    } else if dx == -1 && dy == -1 {
        // north-west
        if x1 == 0 {
            if 2 * y1 < cols {
                y2 += rows;
            } else {
                x2 = cols - y1 - 1;
                y2 = cols - 1;
            }
        } else if y1 == 0 {
            y2 = rows - x1 - 1;
            x2 = rows - 1;
        }
    } else if dx == 1 && dy == -1 {
        // south-west
        if x1 == rows - 1 {
            if 2 * y1 < cols {
                y2 += rows;
            } else {
                x2 = rows - (cols - y1);
                y2 = cols - 1;
            }
        } else if y1 == 0 {
            y2 = x1;
            x2 = 0;
        }
    } else if dx == -1 && dy == 1 {
        // north-east
        if x1 == 0 {
            if 2 * y1 > cols {
                y2 -= rows;
            } else {
                x2 = y2 - 1;
                y2 = 0;
            }
        } else if y1 == cols - 1 {
            y2 = cols - (rows - x1);
            x2 = rows - 1;
        }
    }
    Point::new(x2.rem_euclid(rows), y2.rem_euclid(cols))
}

/// Whether a diagonal step from `from` to `to` would cut through the
/// shared corner of two walls.
///
/// The two cells orthogonally adjacent to both endpoints are probed
/// (modulo the grid, so the check is wrap-aware); the move is illegal only
/// when both are occupied. Cardinal steps — and diagonal steps whose
/// coordinates were remapped by the seam correction — never match the
/// four patterns and are always legal.
pub fn check_diagonal_crossing(from: Point, to: Point, grid: &Grid) -> bool {
    let (rows, cols) = (grid.rows(), grid.cols());
    if rows == 0 || cols == 0 {
        return false;
    }
    let (x, y) = (from.x, from.y);
    let (di, dj) = (to.x - x, to.y - y);
    let blocked = |r: i32, c: i32| {
        !grid.is_free(Point::new(r.rem_euclid(rows), c.rem_euclid(cols)))
    };
    (di == 1 && dj == 1 && blocked(x + 1, y) && blocked(x, y + 1))
        || (di == -1 && dj == -1 && blocked(x - 1, y) && blocked(x, y - 1))
        || (di == 1 && dj == -1 && blocked(x + 1, y) && blocked(x, y - 1))
        || (di == -1 && dj == 1 && blocked(x - 1, y) && blocked(x, y + 1))
}
