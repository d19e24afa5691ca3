//! Manhattan distance heuristic
//!
//! Admissible and consistent under unit move cost, which is what makes the
//! estimate-ordered search return a shortest-move solution.

use crate::board::grid::Board;

/// Sum of L1 distances from every non-blank tile to its goal cell
///
/// Zero exactly when the board is in the goal configuration. The blank
/// contributes nothing; counting it would break admissibility.
pub fn manhattan_distance(board: &Board) -> u32 {
    let size = board.size();
    board
        .indexed_tiles()
        .filter(|&(_, value)| value != 0)
        .map(|((row, col), value)| {
            let (goal_row, goal_col) = Board::goal_position(value, size);
            (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
        })
        .sum()
}
