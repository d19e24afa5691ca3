//! Human-readable rendering of boards, paths, and solve summaries

use std::io::Write;

use crate::board::grid::Board;
use crate::search::engine::Solution;

/// Write one board as a space-separated, width-aligned grid
///
/// # Errors
///
/// Propagates write failures from the underlying writer.
pub fn write_board<W: Write>(writer: &mut W, board: &Board) -> std::io::Result<()> {
    write!(writer, "{board}")
}

/// Write a board sequence separated by blank lines, root first
///
/// # Errors
///
/// Propagates write failures from the underlying writer.
pub fn write_path<W: Write>(writer: &mut W, boards: &[Board]) -> std::io::Result<()> {
    for board in boards {
        write_board(writer, board)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Write the solve summary line
///
/// # Errors
///
/// Propagates write failures from the underlying writer.
pub fn write_summary<W: Write>(writer: &mut W, solution: &Solution) -> std::io::Result<()> {
    writeln!(
        writer,
        "Solved in {} moves ({} iterations, {} boards explored)",
        solution.path_cost, solution.iterations, solution.explored
    )
}
