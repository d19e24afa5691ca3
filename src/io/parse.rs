//! Board file parsing
//!
//! Board files are plain text: tile values separated by whitespace or
//! commas, row-major, with `0` for the blank. Line breaks are cosmetic.
//! The dimension is inferred from the value count, which must be a
//! perfect square.

use std::path::Path;

use crate::board::grid::Board;
use crate::io::configuration::MAX_BOARD_DIMENSION;
use crate::io::error::{Result, SolverError, invalid_board};

/// Read and parse a board file into a validated [`Board`]
///
/// # Errors
///
/// Returns `BoardFile` if the file cannot be read, or `InvalidBoard` if
/// its contents do not describe a valid configuration.
pub fn board_from_file(path: &Path) -> Result<Board> {
    let text = std::fs::read_to_string(path).map_err(|source| SolverError::BoardFile {
        path: path.to_path_buf(),
        source,
    })?;
    board_from_text(&text)
}

/// Parse board text into a validated [`Board`]
///
/// # Errors
///
/// Returns `InvalidBoard` if a token is not a tile value, the value count
/// is not a perfect square, or the values fail board validation.
pub fn board_from_text(text: &str) -> Result<Board> {
    let tiles = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u16>()
                .map_err(|e| invalid_board(&format!("tile value '{token}': {e}")))
        })
        .collect::<Result<Vec<u16>>>()?;

    let size = inferred_dimension(tiles.len())?;
    Board::from_tiles(size, &tiles)
}

/// Infer N from a value count that must equal N²
fn inferred_dimension(count: usize) -> Result<usize> {
    let size = (0..=MAX_BOARD_DIMENSION)
        .find(|s| s * s >= count)
        .unwrap_or(MAX_BOARD_DIMENSION);
    if size * size == count {
        Ok(size)
    } else {
        Err(invalid_board(&format!(
            "{count} values do not form a square board"
        )))
    }
}
