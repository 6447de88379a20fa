//! Progress reporters for terminal and log output.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::ports::ProgressReporter;

/// Progress bar on stderr.
pub struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{spinner:.green} [{bar:30.cyan/blue}] {percent:>3}% {msg}")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for TerminalProgress {
    fn begin(&self, task: &str, total_units: u64) {
        self.bar.set_length(total_units);
        self.bar.set_position(0);
        self.bar.set_message(task.to_string());
    }

    fn sub_task(&self, label: &str) {
        self.bar.set_message(label.to_string());
    }

    fn worked(&self, units: u64) {
        self.bar.inc(units);
    }

    fn done(&self) {
        self.bar.finish_and_clear();
    }
}

/// Emits each phase as a log event; used when stderr is not a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn begin(&self, task: &str, total_units: u64) {
        info!(task, total_units, "started");
    }

    fn sub_task(&self, label: &str) {
        info!(phase = label, "progress");
    }

    fn worked(&self, _units: u64) {}

    fn done(&self) {
        info!("finished");
    }
}
