//! Best-first search loop and path reconstruction
//!
//! The solver seeds the frontier with the root configuration and repeatedly
//! pops the candidate with the lowest total estimated cost. Popping the goal
//! ends the search; any other unexplored board is expanded into up to four
//! children, one per legal blank move. Every node survives in the arena
//! until the solver is dropped, so the solution path can be walked back
//! through parent handles after the loop finishes.

use std::collections::HashSet;

use crate::board::grid::Board;
use crate::board::moves::Move;
use crate::io::error::{Result, SolverError};
use crate::search::arena::{Node, NodeArena, NodeId};
use crate::search::frontier::Frontier;
use crate::search::heuristic::manhattan_distance;

/// Snapshot of search activity handed to observers once per iteration
#[derive(Debug, Clone, Copy)]
pub struct SearchProgress {
    /// Frontier pops performed so far, counting this one
    pub iteration: usize,
    /// Candidates currently queued in the frontier
    pub frontier_len: usize,
    /// Distinct boards expanded so far
    pub explored: usize,
    /// Total estimated cost of the node popped this iteration
    pub best_estimate: u32,
}

/// Per-iteration hook for progress reporting and cancellation
///
/// The search loop itself has no other suspension points; an observer that
/// returns `false` is the supported way to stop a long-running solve.
pub trait SearchObserver {
    /// Called after each frontier pop; return `false` to cancel the search
    fn on_iteration(&mut self, progress: &SearchProgress) -> bool;
}

/// Outcome of a successful search
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    /// Handle of the goal node; feed to [`Solver::path_to`]
    pub node: NodeId,
    /// Optimal number of moves from the initial board to the goal
    pub path_cost: u32,
    /// Frontier pops the search performed
    pub iterations: usize,
    /// Distinct boards expanded during the search
    pub explored: usize,
}

/// Best-first solver for one initial board configuration
///
/// The goal board is computed once per instance from the configured
/// dimension rather than shared as process-wide state.
#[derive(Debug)]
pub struct Solver {
    initial: Board,
    goal: Board,
    arena: NodeArena,
}

impl Solver {
    /// Build a solver for a row-major list of `size * size` tile values
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoard` if the values are not a valid permutation of
    /// `0..size²-1` with a single blank, or the dimension is unsupported.
    pub fn new(size: usize, tiles: &[u16]) -> Result<Self> {
        let initial = Board::from_tiles(size, tiles)?;
        Ok(Self::from_board(initial))
    }

    /// Build a solver from an already-validated board
    pub fn from_board(initial: Board) -> Self {
        let goal = Board::solved(initial.size());
        Self {
            initial,
            goal,
            arena: NodeArena::new(),
        }
    }

    /// The configuration the search starts from
    pub const fn initial(&self) -> &Board {
        &self.initial
    }

    /// The canonical solved configuration for this solver's dimension
    pub const fn goal(&self) -> &Board {
        &self.goal
    }

    /// Look up a search node produced by the last solve
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    /// Run the search to completion without an observer
    ///
    /// # Errors
    ///
    /// Returns `Unsolvable` when the parity check rules the board out
    /// before searching, or `FrontierExhausted` if the frontier empties
    /// without the goal being popped.
    pub fn solve(&mut self) -> Result<Solution> {
        self.run(None)
    }

    /// Run the search, reporting each iteration to the observer
    ///
    /// # Errors
    ///
    /// As [`Solver::solve`], plus `Canceled` when the observer returns
    /// `false`.
    pub fn solve_with_observer(&mut self, observer: &mut dyn SearchObserver) -> Result<Solution> {
        self.run(Some(observer))
    }

    fn run(&mut self, mut observer: Option<&mut dyn SearchObserver>) -> Result<Solution> {
        if !self.initial.is_solvable() {
            return Err(SolverError::Unsolvable {
                size: self.initial.size(),
                inversions: self.initial.inversions(),
            });
        }

        self.arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let mut explored: HashSet<Board> = HashSet::new();

        let blank = self
            .initial
            .find_blank()
            .ok_or_else(|| SolverError::InvalidBoard {
                reason: "board has no blank cell".to_string(),
            })?;
        let estimate = manhattan_distance(&self.initial);
        let root = self.arena.insert(Node {
            board: self.initial.clone(),
            blank,
            path_cost: 0,
            estimate,
            parent: None,
        });
        frontier.push(estimate, root);

        let mut iterations = 0usize;
        while let Some(id) = frontier.pop() {
            iterations += 1;

            // Handles are minted by this arena, so the lookup cannot miss.
            let Some(node) = self.arena.get(id) else {
                break;
            };
            let board = node.board.clone();
            let node_blank = node.blank;
            let path_cost = node.path_cost;
            let node_estimate = node.estimate;

            if let Some(obs) = observer.as_deref_mut() {
                let progress = SearchProgress {
                    iteration: iterations,
                    frontier_len: frontier.len(),
                    explored: explored.len(),
                    best_estimate: node_estimate,
                };
                if !obs.on_iteration(&progress) {
                    return Err(SolverError::Canceled {
                        iteration: iterations,
                    });
                }
            }

            if board == self.goal {
                return Ok(Solution {
                    node: id,
                    path_cost,
                    iterations,
                    explored: explored.len(),
                });
            }

            if !explored.contains(&board) {
                self.expand(id, &board, node_blank, path_cost, &mut frontier);
            }
            explored.insert(board);
        }

        Err(SolverError::FrontierExhausted {
            iterations,
            explored: explored.len(),
        })
    }

    /// Push every legally-produced child of the node onto the frontier
    ///
    /// Directions are attempted in the fixed order Up, Down, Left, Right;
    /// illegal ones are skipped rather than reported.
    fn expand(
        &mut self,
        parent: NodeId,
        board: &Board,
        blank: (usize, usize),
        path_cost: u32,
        frontier: &mut Frontier,
    ) {
        for mv in Move::EXPANSION_ORDER {
            if let Some((child_board, child_blank)) = board.with_blank_moved(blank, mv) {
                let child_cost = path_cost + 1;
                let child_estimate = child_cost + manhattan_distance(&child_board);
                let child = self.arena.insert(Node {
                    board: child_board,
                    blank: child_blank,
                    path_cost: child_cost,
                    estimate: child_estimate,
                    parent: Some(parent),
                });
                frontier.push(child_estimate, child);
            }
        }
    }

    /// Ordered board sequence from the initial configuration to `node`
    ///
    /// Walks parent handles back to the root with an explicit loop, then
    /// reverses; deep 15-puzzle solutions stay clear of recursion limits.
    /// The result holds `path_cost + 1` boards.
    pub fn path_to(&self, node: NodeId) -> Vec<Board> {
        let mut boards = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            let Some(entry) = self.arena.get(id) else {
                break;
            };
            boards.push(entry.board.clone());
            current = entry.parent;
        }
        boards.reverse();
        boards
    }
}
