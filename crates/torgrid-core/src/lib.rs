//! Core model for toroidal occupancy grids.
//!
//! This crate holds the pieces every other torgrid crate builds on:
//!
//! - [`Point`] and [`Range`] geometry primitives,
//! - the [`Grid`] of occupancy [`Cell`]s,
//! - the wrap-aware move model: [`valid_moves`], the per-direction seam
//!   correction [`diagonal_adjusted`], and the corner-cutting legality
//!   check [`check_diagonal_crossing`].
//!
//! The grid is topologically a torus when wraparound is requested: a move
//! off one edge re-enters from the opposite edge, with diagonal moves
//! redirected so the seam is traversed consistently.

pub mod geom;
pub mod grid;
pub mod moves;

pub use geom::{Point, Range};
pub use grid::{Cell, Grid};
pub use moves::{check_diagonal_crossing, diagonal_adjusted, valid_moves};
