//! CLI entry point for the sliding tile puzzle solver

use clap::Parser;
use slidepath::io::cli::{Cli, SolveRunner};

fn main() -> slidepath::Result<()> {
    let cli = Cli::parse();
    let runner = SolveRunner::new(cli);
    runner.run()
}
