//! A perfect solver for the board game 'Connect 4'
//!
//! Positions are described as strings of 1-indexed columns in play order.
//! The solver returns the game-theoretic score of the position under
//! optimal play by both sides, using an optimised game tree search.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_solver::{solver::Solver, bitboard::BitBoard};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = BitBoard::from_moves("112233")?;
//!
//! let mut solver = Solver::new();
//! assert_eq!(solver.solve(board, false), 18);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod transposition_table;

pub mod bitboard;

pub mod solver;


pub use bitboard::BitBoard;
pub use solver::Solver;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// ensure that the given dimensions fit in a u64 for the bitboard representation
const_assert!(WIDTH * (HEIGHT + 1) < 64);
