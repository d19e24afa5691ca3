//! Blank-tile move directions
//!
//! A move names the direction the blank travels, not the tile. Moving the
//! blank up swaps it with the tile above it, and so on.

use std::fmt;

/// Direction the blank tile moves during expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Swap the blank with the tile above it
    Up,
    /// Swap the blank with the tile below it
    Down,
    /// Swap the blank with the tile to its left
    Left,
    /// Swap the blank with the tile to its right
    Right,
}

impl Move {
    /// Fixed order in which expansion attempts the four directions
    pub const EXPANSION_ORDER: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row and column delta applied to the blank position
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        };
        write!(f, "{name}")
    }
}
