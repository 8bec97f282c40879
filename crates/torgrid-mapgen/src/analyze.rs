//! Closed-space detection and connectivity repair.
//!
//! The detectors flood-fill free cells with an explicit stack; a region
//! is "closed" when the fill never reaches the grid boundary, which is
//! how a caller validates candidate target placement. The repair passes
//! mutate a grid in place: probabilistic door punching near the border,
//! dead-end reduction, and a deterministic one-wall opening per sealed
//! pocket.

use rand::Rng;
use rand::RngExt;
use torgrid_core::{Cell, Grid, Point, Range};

const CARDINALS: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

/// Flood-fill from `start` and report whether the region is sealed away
/// from the grid boundary.
///
/// Returns `(true, region)` when the fill stayed interior, and
/// `(false, partial)` the moment a boundary cell is reached — the visit
/// list then covers only the cells seen so far. A blocked start yields
/// `(false, [])`.
pub fn check_closed_path(grid: &Grid, start: Point) -> (bool, Vec<Point>) {
    if !grid.is_free(start) {
        return (false, Vec::new());
    }
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut seen = vec![false; grid.len()];
    let mut order = Vec::new();
    let mut stack = vec![start];
    while let Some(p) = stack.pop() {
        let idx = (p.x * cols + p.y) as usize;
        if seen[idx] {
            continue;
        }
        seen[idx] = true;
        order.push(p);
        if p.x == 0 || p.x == rows - 1 || p.y == 0 || p.y == cols - 1 {
            return (false, order);
        }
        for d in CARDINALS {
            let n = p + d;
            if grid.is_free(n) {
                stack.push(n);
            }
        }
    }
    (true, order)
}

/// Full flood fill for the batch analyses: fills the whole region,
/// marking `seen`, and reports whether it ever touched the boundary.
fn flood_region(grid: &Grid, start: Point, seen: &mut [bool]) -> (bool, Vec<Point>) {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut region = Vec::new();
    let mut closed = true;
    let mut stack = vec![start];
    while let Some(p) = stack.pop() {
        let idx = (p.x * cols + p.y) as usize;
        if seen[idx] {
            continue;
        }
        seen[idx] = true;
        region.push(p);
        if p.x == 0 || p.x == rows - 1 || p.y == 0 || p.y == cols - 1 {
            closed = false;
        }
        for d in CARDINALS {
            let n = p + d;
            if grid.is_free(n) && !seen[(n.x * cols + n.y) as usize] {
                stack.push(n);
            }
        }
    }
    (closed, region)
}

/// All cells lying inside sealed pockets. Each free region is flooded at
/// most once; the seen-map carries across scans.
pub fn get_closed_spaces(grid: &Grid) -> Vec<Point> {
    let cols = grid.cols();
    let mut seen = vec![false; grid.len()];
    let mut out = Vec::new();
    for p in grid.bounds().iter() {
        if seen[(p.x * cols + p.y) as usize] || !grid.is_free(p) {
            continue;
        }
        let (closed, region) = flood_region(grid, p, &mut seen);
        if closed {
            out.extend(region);
        }
    }
    out
}

/// Probabilistic connectivity repair inside `bounds`.
///
/// Two rules, applied in one pass over the window: cells on the window's
/// outer band (its first row/column and the `rows-2`/`cols-2` band) have
/// a 40% chance of opening when their inward neighbor is already free,
/// and every free cell hemmed in by exactly three blocked orthogonal
/// neighbors (counted modulo the grid, restricted to the interior band)
/// opens one of them at random. Reduces pockets and dead ends without any
/// connectivity guarantee.
pub fn make_map_connected<R: Rng>(grid: &mut Grid, bounds: Range, rng: &mut R) {
    let (rows, cols) = (grid.rows(), grid.cols());
    let (h, w) = (bounds.rows(), bounds.cols());
    for p in bounds.iter() {
        let im = p.x - bounds.min.x;
        let jm = p.y - bounds.min.y;
        if im == 0 || jm == 0 || im == h - 2 || jm == w - 2 {
            let door = (im == 0
                && grid.is_free(Point::new(p.x + 1, p.y))
                && rng.random::<f64>() < 0.4)
                || (im == h - 2
                    && grid.is_free(Point::new(p.x - 1, p.y))
                    && rng.random::<f64>() < 0.4)
                || (jm == 0
                    && grid.is_free(Point::new(p.x, p.y + 1))
                    && rng.random::<f64>() < 0.4)
                || (jm == w - 2
                    && grid.is_free(Point::new(p.x, p.y - 1))
                    && rng.random::<f64>() < 0.4);
            if door {
                grid.set(p, Cell::FREE);
            }
        }
        if grid.is_free(p) {
            let mut blocked = Vec::new();
            for d in CARDINALS {
                let n = Point::new((p.x + d.x).rem_euclid(rows), (p.y + d.y).rem_euclid(cols));
                if n.x >= 1 && n.x < rows - 2 && n.y >= 1 && n.y < cols - 2 && !grid.is_free(n) {
                    blocked.push(n);
                }
            }
            if blocked.len() == 3 {
                let open = blocked[rng.random_range(0..blocked.len())];
                grid.set(open, Cell::FREE);
            }
        }
    }
}

/// Door punching on the outermost border ring: each border cell has a 40%
/// chance of opening when its inward neighbor is already free.
pub fn break_up_edges<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let (rows, cols) = (grid.rows(), grid.cols());
    for p in grid.bounds().iter() {
        if p.x != 0 && p.y != 0 && p.x != rows - 1 && p.y != cols - 1 {
            continue;
        }
        let door = (p.x == 0 && grid.is_free(Point::new(p.x + 1, p.y)) && rng.random::<f64>() < 0.4)
            || (p.x == rows - 1
                && grid.is_free(Point::new(p.x - 1, p.y))
                && rng.random::<f64>() < 0.4)
            || (p.y == 0 && grid.is_free(Point::new(p.x, p.y + 1)) && rng.random::<f64>() < 0.4)
            || (p.y == cols - 1
                && grid.is_free(Point::new(p.x, p.y - 1))
                && rng.random::<f64>() < 0.4);
        if door {
            grid.set(p, Cell::FREE);
        }
    }
}

/// Open every sealed pocket by breaking exactly one of its bordering
/// walls.
///
/// Regions are found by flood fill in scan order; for each region that
/// never touches the boundary, the first member with a blocked cardinal
/// neighbor — probed east, west, south, north — gets that neighbor
/// opened. Unlike [`make_map_connected`] this is deterministic, and every
/// previously sealed region ends up reachable from outside it.
pub fn make_map_open(grid: &mut Grid) {
    const EXIT_DIRS: [Point; 4] = [
        Point::new(0, 1),
        Point::new(0, -1),
        Point::new(1, 0),
        Point::new(-1, 0),
    ];
    let cols = grid.cols();
    let mut seen = vec![false; grid.len()];
    let mut opened = 0usize;
    for p in grid.bounds().iter() {
        if seen[(p.x * cols + p.y) as usize] || !grid.is_free(p) {
            continue;
        }
        let (closed, region) = flood_region(grid, p, &mut seen);
        if !closed {
            continue;
        }
        'region: for m in region {
            for d in EXIT_DIRS {
                let n = m + d;
                if grid.contains(n) && !grid.is_free(n) {
                    grid.set(n, Cell::FREE);
                    opened += 1;
                    break 'region;
                }
            }
        }
    }
    if opened > 0 {
        log::debug!("make_map_open: opened {opened} sealed regions");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// 5×5 grid with a single one-cell pocket at (2, 2).
    fn pocket_grid() -> Grid {
        let mut g = Grid::new(5, 5);
        for p in [
            Point::new(1, 2),
            Point::new(3, 2),
            Point::new(2, 1),
            Point::new(2, 3),
        ] {
            g.set(p, Cell::WALL);
        }
        g
    }

    #[test]
    fn nothing_is_closed_on_an_open_grid() {
        let g = Grid::new(5, 5);
        for p in g.bounds().iter() {
            let (closed, visited) = check_closed_path(&g, p);
            assert!(!closed, "{p} reported closed");
            assert!(!visited.is_empty());
        }
        assert!(get_closed_spaces(&g).is_empty());
    }

    #[test]
    fn single_pocket_is_detected() {
        let g = pocket_grid();
        let (closed, visited) = check_closed_path(&g, Point::new(2, 2));
        assert!(closed);
        assert_eq!(visited, vec![Point::new(2, 2)]);
        // Outside the pocket nothing is closed.
        let (closed, _) = check_closed_path(&g, Point::new(0, 0));
        assert!(!closed);
        assert_eq!(get_closed_spaces(&g), vec![Point::new(2, 2)]);
    }

    #[test]
    fn blocked_start_reports_open_and_empty() {
        let g = pocket_grid();
        let (closed, visited) = check_closed_path(&g, Point::new(1, 2));
        assert!(!closed);
        assert!(visited.is_empty());
    }

    #[test]
    fn make_map_open_releases_the_pocket() {
        let mut g = pocket_grid();
        make_map_open(&mut g);
        let (closed, _) = check_closed_path(&g, Point::new(2, 2));
        assert!(!closed);
        assert!(get_closed_spaces(&g).is_empty());
        // Exactly one wall opened, the east one by probe order.
        assert_eq!(g.count(Cell::WALL), 3);
        assert!(g.is_free(Point::new(2, 3)));
    }

    #[test]
    fn make_map_open_handles_multiple_pockets() {
        let mut g = Grid::new(9, 9);
        for center in [Point::new(2, 2), Point::new(6, 6)] {
            for d in CARDINALS {
                g.set(center + d, Cell::WALL);
            }
        }
        assert_eq!(get_closed_spaces(&g).len(), 2);
        make_map_open(&mut g);
        assert!(get_closed_spaces(&g).is_empty());
    }

    #[test]
    fn make_map_open_leaves_open_grids_alone() {
        let mut g = Grid::new(5, 5);
        g.set(Point::new(2, 2), Cell::WALL);
        let before = g.clone();
        make_map_open(&mut g);
        assert_eq!(g, before);
    }

    #[test]
    fn get_closed_spaces_collects_whole_regions() {
        // 7×7 with a 2-cell pocket.
        let mut g = Grid::new(7, 7);
        for p in [
            Point::new(1, 2),
            Point::new(1, 3),
            Point::new(2, 1),
            Point::new(2, 4),
            Point::new(3, 2),
            Point::new(3, 3),
        ] {
            g.set(p, Cell::WALL);
        }
        let mut closed = get_closed_spaces(&g);
        closed.sort();
        assert_eq!(closed, vec![Point::new(2, 2), Point::new(2, 3)]);
    }

    #[test]
    fn make_map_connected_opens_three_walled_dead_ends() {
        let mut g = Grid::new(6, 6);
        let walls = [Point::new(1, 2), Point::new(3, 2), Point::new(2, 1)];
        for &p in &walls {
            g.set(p, Cell::WALL);
        }
        let mut rng = StdRng::seed_from_u64(17);
        let bounds = g.bounds();
        make_map_connected(&mut g, bounds, &mut rng);
        let remaining = walls.iter().filter(|&&p| !g.is_free(p)).count();
        assert_eq!(remaining, 2, "exactly one hemming wall should open");
    }

    #[test]
    fn repair_passes_never_add_walls() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut g = Grid::from_fn(8, 8, |p| {
                if (p.x * 31 + p.y * 17) % 3 == 0 {
                    Cell::WALL
                } else {
                    Cell::FREE
                }
            });
            let walls_before = g.count(Cell::WALL);
            let bounds = g.bounds();
            make_map_connected(&mut g, bounds, &mut rng);
            assert!(g.count(Cell::WALL) <= walls_before);
            let walls_mid = g.count(Cell::WALL);
            break_up_edges(&mut g, &mut rng);
            assert!(g.count(Cell::WALL) <= walls_mid);
        }
    }

    #[test]
    fn break_up_edges_only_touches_the_border() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut g = Grid::from_fn(7, 7, |p| {
                if p.x == 0 || p.y == 0 || p.x == 6 || p.y == 6 {
                    Cell::WALL
                } else {
                    Cell::FREE
                }
            });
            let before = g.clone();
            break_up_edges(&mut g, &mut rng);
            for (p, c) in before.iter() {
                let interior = p.x != 0 && p.y != 0 && p.x != 6 && p.y != 6;
                if interior {
                    assert_eq!(g.at(p), Some(c), "interior cell {p} changed");
                }
            }
        }
    }
}
