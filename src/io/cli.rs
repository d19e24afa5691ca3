//! Command-line interface for solving board files

use clap::Parser;
use std::path::PathBuf;

use crate::io::error::Result;
use crate::io::parse::board_from_file;
use crate::io::progress::ProgressManager;
use crate::io::render::{write_path, write_summary};
use crate::search::engine::{Solution, Solver};

#[derive(Parser)]
#[command(name = "slidepath")]
#[command(
    author,
    version,
    about = "Solve sliding tile puzzles with best-first search"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// Board file to solve (row-major tile values, 0 for the blank)
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print only the solve summary, not the board sequence
    #[arg(short, long)]
    pub summary: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates parsing, solving, and rendering for one board file
pub struct SolveRunner {
    cli: Cli,
}

impl SolveRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve the target board and write the result to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the board file cannot be read or parsed, the
    /// board is unsolvable, or writing the output fails.
    pub fn run(&self) -> Result<()> {
        let board = board_from_file(&self.cli.target)?;
        let mut solver = Solver::from_board(board);

        let solution = self.solve(&mut solver)?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if !self.cli.summary {
            write_path(&mut out, &solver.path_to(solution.node))?;
        }
        write_summary(&mut out, &solution)?;
        Ok(())
    }

    fn solve(&self, solver: &mut Solver) -> Result<Solution> {
        if self.cli.should_show_progress() {
            let mut progress = ProgressManager::new();
            let outcome = solver.solve_with_observer(&mut progress);
            progress.finish();
            outcome
        } else {
            solver.solve()
        }
    }
}
