//! Maze construction algorithms.
//!
//! Every generator returns a fresh [`MazeResult`]: the grid, the
//! pre-carve wall layout (`original`, for generators that start from a
//! filled grid), and the cells whose occupancy actually changed during
//! generation in event order (`converted`). The two point lists exist so
//! a consumer can animate the build; they carry no other invariant.
//!
//! All randomness flows through the caller-supplied `R: Rng`, so a
//! seeded `StdRng` reproduces a maze exactly.

use rand::Rng;
use rand::RngExt;
use rand::seq::{IndexedRandom, SliceRandom};
use torgrid_core::{Cell, Grid, Point, valid_moves};

/// The 13 canonical 2×2 occupancy stamps used by the simple generator.
const BLOCK_PATTERNS: [[[i32; 2]; 2]; 13] = [
    [[0, 0], [0, 0]],
    [[1, 0], [0, 0]],
    [[0, 1], [0, 0]],
    [[0, 0], [1, 0]],
    [[0, 0], [0, 1]],
    [[1, 1], [0, 0]],
    [[0, 0], [1, 1]],
    [[1, 0], [1, 0]],
    [[0, 1], [0, 1]],
    [[1, 1], [1, 0]],
    [[1, 0], [1, 1]],
    [[0, 1], [1, 1]],
    [[1, 1], [0, 1]],
];

/// Output of one generator run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeResult {
    pub grid: Grid,
    /// Wall cells present before any carving. Empty for generators that
    /// start from an open grid.
    pub original: Vec<Point>,
    /// Cells whose occupancy changed, in the order the changes happened.
    pub converted: Vec<Point>,
}

/// Maze generator over a caller-supplied random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Write `cell` at `p`, recording the event only when the occupancy
    /// actually flips.
    fn put(grid: &mut Grid, p: Point, cell: Cell, converted: &mut Vec<Point>) {
        if let Some(old) = grid.at(p) {
            if old != cell {
                grid.set(p, cell);
                converted.push(p);
            }
        }
    }

    /// Random 2×2 block stamping.
    ///
    /// Scans the grid in 2×2 steps, draws one of the canonical block
    /// patterns, and gives each set cell a 40% chance of stamping a wall
    /// square whose side comes from a heavily 1-biased distribution.
    /// Stamp anchors wrap around the grid; their extent clamps at the far
    /// edges.
    pub fn simple_random(&mut self, rows: i32, cols: i32) -> MazeResult {
        const SIZES: [(i32, f64); 4] = [(1, 0.9), (2, 0.04), (3, 0.007), (4, 0.004)];
        let mut grid = Grid::new(rows, cols);
        let mut converted = Vec::new();
        let mut i = 0;
        while i < rows {
            let mut j = 0;
            while j < cols {
                let pattern = BLOCK_PATTERNS[self.rng.random_range(0..BLOCK_PATTERNS.len())];
                for (i2, pattern_row) in pattern.iter().enumerate() {
                    for (j2, &set) in pattern_row.iter().enumerate() {
                        if set == 0 || self.rng.random::<f64>() >= 0.4 {
                            continue;
                        }
                        let size = SIZES
                            .choose_weighted(&mut self.rng, |s| s.1)
                            .map(|s| s.0)
                            .unwrap_or(1);
                        let x = (i + i2 as i32) % rows;
                        let y = (j + j2 as i32) % cols;
                        for bx in x..(x + size).min(rows) {
                            for by in y..(y + size).min(cols) {
                                Self::put(&mut grid, Point::new(bx, by), Cell::WALL, &mut converted);
                            }
                        }
                    }
                }
                j += 2;
            }
            i += 2;
        }
        MazeResult {
            grid,
            original: Vec::new(),
            converted,
        }
    }

    /// Checkerboard walls with hole punching.
    ///
    /// Every even row is fully walled and odd rows are walled at even
    /// columns; each odd/odd free cell with at least two adjacent walls
    /// (8-way) then gets two distinct randomly-chosen walls removed.
    pub fn diagonal_random(&mut self, rows: i32, cols: i32) -> MazeResult {
        let mut grid = Grid::new(rows, cols);
        let mut original = Vec::new();
        let mut converted = Vec::new();
        for p in grid.bounds().iter() {
            if p.x % 2 == 0 || p.y % 2 == 0 {
                grid.set(p, Cell::WALL);
                original.push(p);
            }
        }
        let mut x = 1;
        while x < rows {
            let mut y = 1;
            while y < cols {
                let p = Point::new(x, y);
                if grid.is_free(p) {
                    let mut walls: Vec<Point> = valid_moves(p, rows, cols, false, true)
                        .into_iter()
                        .filter(|&q| !grid.is_free(q))
                        .collect();
                    if walls.len() >= 2 {
                        let first = walls.remove(self.rng.random_range(0..walls.len()));
                        let second = walls[self.rng.random_range(0..walls.len())];
                        Self::put(&mut grid, first, Cell::FREE, &mut converted);
                        Self::put(&mut grid, second, Cell::FREE, &mut converted);
                    }
                }
                y += 2;
            }
            x += 2;
        }
        MazeResult {
            grid,
            original,
            converted,
        }
    }

    /// Dungeon rooms over random noise.
    ///
    /// Starts from a uniform 50/50 wall fill, then clears a
    /// grid-size-scaled number of square "rooms" of random radius at
    /// random centers, wrapping at the edges.
    pub fn dungeon_rooms(&mut self, rows: i32, cols: i32) -> MazeResult {
        let mut grid = Grid::new(rows, cols);
        let mut original = Vec::new();
        let mut converted = Vec::new();
        for p in grid.bounds().iter() {
            if self.rng.random::<f64>() >= 0.5 {
                grid.set(p, Cell::WALL);
                original.push(p);
            }
        }
        let scaling = (rows / 30).max(cols / 60);
        let rooms = self
            .rng
            .random_range(20 + scaling * 5..40 + scaling * 5);
        let mut sizes: Vec<i32> = vec![1, 2, 3];
        sizes.extend(4..3 + scaling);
        for _ in 0..rooms {
            let center = Point::new(
                self.rng.random_range(0..rows),
                self.rng.random_range(0..cols),
            );
            let hole = sizes[self.rng.random_range(0..sizes.len())];
            for i in center.x - hole..center.x + hole {
                for j in center.y - hole..center.y + hole {
                    let p = Point::new(i.rem_euclid(rows), j.rem_euclid(cols));
                    Self::put(&mut grid, p, Cell::FREE, &mut converted);
                }
            }
        }
        log::debug!("dungeon rooms: carved {rooms} rooms on {rows}x{cols}");
        MazeResult {
            grid,
            original,
            converted,
        }
    }

    /// Randomized depth-first "perfect maze" carving.
    ///
    /// Runs on odd dimensions — even row or column counts are clamped
    /// down by one, and the returned grid has the clamped size. Carves in
    /// 2-cell steps from a random odd cell, removing the wall between,
    /// and backtracks when no unvisited neighbor remains. Lattices
    /// thinner than 3 come back as the trivial all-wall grid.
    pub fn dfs_maze(&mut self, rows: i32, cols: i32) -> MazeResult {
        let (odd_rows, odd_cols) = (rows - (rows % 2 == 0) as i32, cols - (cols % 2 == 0) as i32);
        let mut grid = Grid::new(odd_rows, odd_cols);
        grid.fill(Cell::WALL);
        let original: Vec<Point> = grid.bounds().iter().collect();
        let mut converted = Vec::new();
        if odd_rows < 3 || odd_cols < 3 {
            return MazeResult {
                grid,
                original,
                converted,
            };
        }
        let start = self.random_odd_cell(odd_rows, odd_cols);
        let mut dirs = [
            Point::new(0, 2),
            Point::new(2, 0),
            Point::new(0, -2),
            Point::new(-2, 0),
        ];
        let mut stack = vec![start];
        Self::put(&mut grid, start, Cell::FREE, &mut converted);
        while let Some(&current) = stack.last() {
            dirs.shuffle(&mut self.rng);
            let mut advanced = false;
            for d in dirs {
                let next = current + d;
                if grid.contains(next) && !grid.is_free(next) {
                    let between = Point::new(current.x + d.x / 2, current.y + d.y / 2);
                    Self::put(&mut grid, between, Cell::FREE, &mut converted);
                    Self::put(&mut grid, next, Cell::FREE, &mut converted);
                    stack.push(next);
                    advanced = true;
                    break;
                }
            }
            if !advanced {
                stack.pop();
            }
        }
        MazeResult {
            grid,
            original,
            converted,
        }
    }

    /// Recursive division on an explicit work stack.
    ///
    /// Each region of at least 3×3 gets a full cross of walls through a
    /// random interior point. A gap is punched in all but one of the
    /// cross's four arms — re-drawn while it would seal off a straight
    /// corridor and at least two candidates remain — and the four
    /// quadrants are subdivided in turn. Regions thinner than 3 terminate
    /// the recursion.
    pub fn recursive_division(&mut self, rows: i32, cols: i32) -> MazeResult {
        let mut grid = Grid::new(rows, cols);
        let mut converted = Vec::new();
        let mut regions = vec![(0, 0, rows, cols)];
        while let Some((sx, sy, h, w)) = regions.pop() {
            if h < 3 || w < 3 {
                continue;
            }
            let px = self.rng.random_range(sx + 1..sx + h - 1);
            let py = self.rng.random_range(sy + 1..sy + w - 1);
            for r in sx..sx + h {
                Self::put(&mut grid, Point::new(r, py), Cell::WALL, &mut converted);
            }
            for c in sy..sy + w {
                Self::put(&mut grid, Point::new(px, c), Cell::WALL, &mut converted);
            }
            let mut arms: Vec<Vec<Point>> = [
                (py + 1..sy + w).map(|c| Point::new(px, c)).collect(),
                (sx..px).map(|r| Point::new(r, py)).collect(),
                (sy..py).map(|c| Point::new(px, c)).collect(),
                (px + 1..sx + h).map(|r| Point::new(r, py)).collect(),
            ]
            .into_iter()
            .filter(|arm: &Vec<Point>| !arm.is_empty())
            .collect();
            arms.shuffle(&mut self.rng);
            let gapped = if arms.len() > 1 { arms.len() - 1 } else { 1 };
            for arm in arms.into_iter().take(gapped) {
                let mut candidates = arm;
                let mut gap = candidates[self.rng.random_range(0..candidates.len())];
                while candidates.len() >= 2 && !gap_pierces_wall(&grid, gap) {
                    candidates.retain(|&q| q != gap);
                    gap = candidates[self.rng.random_range(0..candidates.len())];
                }
                Self::put(&mut grid, gap, Cell::FREE, &mut converted);
            }
            regions.push((sx, sy, px - sx, py - sy));
            regions.push((sx, py + 1, px - sx, sy + w - py - 1));
            regions.push((px + 1, sy, sx + h - px - 1, py - sy));
            regions.push((px + 1, py + 1, sx + h - px - 1, sy + w - py - 1));
        }
        MazeResult {
            grid,
            original: Vec::new(),
            converted,
        }
    }

    /// Isolated cells, each opened once.
    ///
    /// Free cells sit at every even/even position with walls everywhere
    /// else; each one then punches a single random in-bounds cardinal
    /// neighbor open.
    pub fn cell_opening(&mut self, rows: i32, cols: i32) -> MazeResult {
        const DIRS: [Point; 4] = [
            Point::new(1, 0),
            Point::new(0, 1),
            Point::new(-1, 0),
            Point::new(0, -1),
        ];
        let mut grid = Grid::new(rows, cols);
        let mut original = Vec::new();
        for p in grid.bounds().iter() {
            if p.x % 2 != 0 || p.y % 2 != 0 {
                grid.set(p, Cell::WALL);
                original.push(p);
            }
        }
        let mut converted = Vec::new();
        let mut c = 0;
        while c < cols {
            let mut r = 0;
            while r < rows {
                let d = DIRS[self.rng.random_range(0..DIRS.len())];
                let gap = Point::new(r + d.x, c + d.y);
                if grid.contains(gap) {
                    Self::put(&mut grid, gap, Cell::FREE, &mut converted);
                }
                r += 2;
            }
            c += 2;
        }
        MazeResult {
            grid,
            original,
            converted,
        }
    }

    /// Randomized Prim's frontier growth.
    ///
    /// Same odd lattice as [`dfs_maze`](Self::dfs_maze): carve a random
    /// odd cell, keep a frontier of distance-2 wall cells, and repeatedly
    /// connect a random frontier cell through its shared wall to a random
    /// already-carved neighbor. Produces a spanning-tree maze with a more
    /// uniform branching texture than the depth-first walk.
    pub fn prims(&mut self, rows: i32, cols: i32) -> MazeResult {
        const DIRS: [Point; 4] = [
            Point::new(0, 2),
            Point::new(2, 0),
            Point::new(0, -2),
            Point::new(-2, 0),
        ];
        let (odd_rows, odd_cols) = (rows - (rows % 2 == 0) as i32, cols - (cols % 2 == 0) as i32);
        let mut grid = Grid::new(odd_rows, odd_cols);
        grid.fill(Cell::WALL);
        let original: Vec<Point> = grid.bounds().iter().collect();
        let mut converted = Vec::new();
        if odd_rows < 3 || odd_cols < 3 {
            return MazeResult {
                grid,
                original,
                converted,
            };
        }
        let start = self.random_odd_cell(odd_rows, odd_cols);
        Self::put(&mut grid, start, Cell::FREE, &mut converted);
        let mut frontier: Vec<Point> = DIRS
            .iter()
            .map(|&d| start + d)
            .filter(|&q| grid.contains(q))
            .collect();
        while !frontier.is_empty() {
            let cell = frontier.swap_remove(self.rng.random_range(0..frontier.len()));
            if grid.is_free(cell) {
                continue;
            }
            let carved: Vec<Point> = DIRS
                .iter()
                .map(|&d| cell + d)
                .filter(|&q| grid.is_free(q))
                .collect();
            if carved.is_empty() {
                continue;
            }
            let link = carved[self.rng.random_range(0..carved.len())];
            let between = Point::new((cell.x + link.x) / 2, (cell.y + link.y) / 2);
            Self::put(&mut grid, between, Cell::FREE, &mut converted);
            Self::put(&mut grid, cell, Cell::FREE, &mut converted);
            for d in DIRS {
                let q = cell + d;
                if grid.contains(q) && !grid.is_free(q) {
                    frontier.push(q);
                }
            }
        }
        MazeResult {
            grid,
            original,
            converted,
        }
    }

    /// A uniformly random odd/odd lattice cell.
    fn random_odd_cell(&mut self, odd_rows: i32, odd_cols: i32) -> Point {
        Point::new(
            1 + 2 * self.rng.random_range(0..(odd_rows - 1) / 2),
            1 + 2 * self.rng.random_range(0..(odd_cols - 1) / 2),
        )
    }
}

/// A gap candidate is acceptable where it pierces a wall perpendicular to
/// open floor: both row neighbors walls and both column neighbors free,
/// or the transpose. Probes wrap so arm ends at the grid edge still
/// validate.
fn gap_pierces_wall(grid: &Grid, p: Point) -> bool {
    let (rows, cols) = (grid.rows(), grid.cols());
    let blocked =
        |r: i32, c: i32| !grid.is_free(Point::new(r.rem_euclid(rows), c.rem_euclid(cols)));
    let up = blocked(p.x - 1, p.y);
    let down = blocked(p.x + 1, p.y);
    let left = blocked(p.x, p.y - 1);
    let right = blocked(p.x, p.y + 1);
    (left && right && !up && !down) || (up && down && !left && !right)
}
