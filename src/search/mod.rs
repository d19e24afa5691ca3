//! Best-first search engine
//!
//! This module contains the search machinery including:
//! - Arena-backed node storage with handle-based parent links
//! - The estimate-ordered frontier with FIFO tie-breaking
//! - The Manhattan distance heuristic
//! - The solve loop and path reconstruction

/// Arena-backed node storage with integer handles
pub mod arena;
/// Search loop, observer hook, and path reconstruction
pub mod engine;
/// Priority frontier ordered by total estimated cost
pub mod frontier;
/// Admissible distance estimate for tile boards
pub mod heuristic;

pub use engine::Solver;
