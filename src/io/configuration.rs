//! Solver constants and runtime configuration defaults

// Board dimension limits
/// Smallest supported board dimension
pub const MIN_BOARD_DIMENSION: usize = 2;

// Safety limit: node memory grows with the state space, and beyond 16x16
// tile values would no longer fit the u16 cell representation anyway
/// Largest supported board dimension
pub const MAX_BOARD_DIMENSION: usize = 16;

// Progress display settings
/// Iterations between progress spinner refreshes
pub const PROGRESS_REPORT_INTERVAL: usize = 1000;
