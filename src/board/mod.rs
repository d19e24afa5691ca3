//! Board state and move model
//!
//! This module contains board-related functionality including:
//! - Board construction, validation, and equality/hashing
//! - Blank-tile move generation
//! - Parity-based solvability analysis

/// Board representation, goal construction, and solvability checks
pub mod grid;
/// Blank-tile move directions and legality offsets
pub mod moves;

pub use grid::Board;
pub use moves::Move;
