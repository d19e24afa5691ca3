//! Input/output surface and ambient concerns
//!
//! This module contains the crate's outer layer including:
//! - Command-line interface and solve orchestration
//! - Board file parsing and human-readable rendering
//! - Progress reporting and error types

/// Command-line interface and solve orchestration
pub mod cli;
/// Named constants and runtime defaults
pub mod configuration;
/// Error types for solver and I/O operations
pub mod error;
/// Board file parsing
pub mod parse;
/// Search progress display
pub mod progress;
/// Human-readable path and summary rendering
pub mod render;
