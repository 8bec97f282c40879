//! Pathfinding over toroidal occupancy grids.
//!
//! Nine entry points hang off [`Pathfinder`]: a weighted
//! [random step](Pathfinder::random_step) plus eight full searches —
//! [depth-first](Pathfinder::depth_first),
//! [breadth-first](Pathfinder::breadth_first),
//! [greedy best-first](Pathfinder::greedy_best_first),
//! [Dijkstra](Pathfinder::dijkstra), [A*](Pathfinder::a_star),
//! [fringe search](Pathfinder::fringe_search),
//! [Bellman-Ford](Pathfinder::bellman_ford) and
//! [iterative deepening A*](Pathfinder::iterative_deepening_a_star).
//!
//! Apart from IDA*, every search runs on one bidirectional scaffold: an
//! optional second frontier grows backward from the target, the two may
//! meet anywhere, and the joined backtrack maps are replayed into a single
//! start→target path. Each algorithm is a thin policy over that scaffold —
//! a frontier discipline plus one expansion step — so ordering and cost
//! quirks stay local to their file.
//!
//! "No path" is not an error: it comes back as a [`SearchResult`] with
//! `found == false` and whatever partial trace the algorithm produced.
//! Only invalid input (out-of-bounds endpoints, an empty grid) fails with
//! a [`SearchError`].

mod astar;
mod bellman;
mod dijkstra;
mod fringe;
mod frontier;
mod greedy;
mod heuristic;
mod idastar;
mod pathfinder;
mod random_walk;
mod reconstruct;
mod search;
mod uninformed;

pub use heuristic::{Metric, heuristic};
pub use pathfinder::Pathfinder;
pub use reconstruct::reconstruct_path;
pub use search::{SearchError, SearchResult};
