//! Error types for solver and I/O operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Initial board is not a valid configuration
    InvalidBoard {
        /// Description of what's wrong with the board
        reason: String,
    },

    /// Board fails the parity invariant and can never reach the goal
    Unsolvable {
        /// Board dimension
        size: usize,
        /// Inversion count that failed the parity check
        inversions: usize,
    },

    /// Frontier emptied before the goal configuration was popped
    ///
    /// Unreachable for boards that pass the parity check; kept as an
    /// explicit terminal state instead of disguising the root as a result.
    FrontierExhausted {
        /// Frontier pops performed before exhaustion
        iterations: usize,
        /// Distinct boards expanded before exhaustion
        explored: usize,
    },

    /// Observer requested the search stop
    Canceled {
        /// Iteration at which the observer canceled
        iteration: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to read a board file from the filesystem
    BoardFile {
        /// Path to the board file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoard { reason } => {
                write!(f, "Invalid board: {reason}")
            }
            Self::Unsolvable { size, inversions } => {
                write!(
                    f,
                    "Board is unsolvable: {size}x{size} parity check failed \
                     with {inversions} inversions"
                )
            }
            Self::FrontierExhausted {
                iterations,
                explored,
            } => {
                write!(
                    f,
                    "Frontier exhausted after {iterations} iterations \
                     ({explored} boards explored) without reaching the goal"
                )
            }
            Self::Canceled { iteration } => {
                write!(f, "Search canceled at iteration {iteration}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::BoardFile { path, source } => {
                write!(
                    f,
                    "Failed to read board file '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BoardFile { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Create an invalid board error
pub fn invalid_board(reason: &impl ToString) -> SolverError {
    SolverError::InvalidBoard {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::BoardFile {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}
