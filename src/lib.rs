//! Best-first search solver for generalized N×N sliding tile puzzles
//!
//! The solver runs an A*-style search ordered by total estimated cost
//! (moves made plus Manhattan distance to the goal) and reconstructs the
//! full board sequence from the initial configuration to the solved one.

#![forbid(unsafe_code)]

/// Board representation, move model, and solvability analysis
pub mod board;
/// Input/output operations, progress reporting, and error handling
pub mod io;
/// Search engine including the node arena, frontier, and heuristic
pub mod search;

pub use io::error::{Result, SolverError};
pub use search::engine::{Solution, Solver};
