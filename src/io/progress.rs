//! Search progress display
//!
//! A spinner refreshed at a fixed iteration interval; the search has no
//! known total length, so the display reports activity rather than a
//! completion percentage.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_REPORT_INTERVAL;
use crate::search::engine::{SearchObserver, SearchProgress};

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner-based activity indicator for a running search
pub struct ProgressManager {
    spinner: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress display ready to observe a search
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        Self { spinner }
    }

    /// Clear the spinner once the search ends
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl SearchObserver for ProgressManager {
    fn on_iteration(&mut self, progress: &SearchProgress) -> bool {
        if progress.iteration % PROGRESS_REPORT_INTERVAL == 0 {
            self.spinner.set_message(format!(
                "iteration {} | frontier {} | explored {} | best estimate {}",
                progress.iteration, progress.frontier_len, progress.explored, progress.best_estimate
            ));
            self.spinner.tick();
        }
        true
    }
}
