//! Maze generation and grid analysis for toroidal occupancy grids.
//!
//! [`MazeGen`] builds seven flavors of procedural maze over a
//! caller-supplied random source, each reporting the cells it changed so
//! a consumer can replay the construction incrementally. The
//! [`analyze`] module inspects and repairs the results: sealed-pocket
//! detection by flood fill, probabilistic door punching, and a
//! deterministic one-wall opening per closed region.

pub mod analyze;
pub mod mazegen;

pub use analyze::{
    break_up_edges, check_closed_path, get_closed_spaces, make_map_connected, make_map_open,
};
pub use mazegen::{MazeGen, MazeResult};
