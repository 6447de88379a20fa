//! Subdivides a finish sequence into weighted phases.

use crate::domain::progress::TOTAL_UNITS;
use crate::domain::{AppError, Phase};
use crate::ports::ProgressReporter;

/// Reports each phase's units once it succeeds; whatever remains is reported
/// as done when dropped.
pub struct WeightedProgress<'a> {
    reporter: &'a dyn ProgressReporter,
    remaining: u64,
}

impl<'a> WeightedProgress<'a> {
    pub fn begin(reporter: &'a dyn ProgressReporter, task: &str) -> Self {
        reporter.begin(task, TOTAL_UNITS);
        Self { reporter, remaining: TOTAL_UNITS }
    }

    pub fn phase<T>(
        &mut self,
        phase: Phase,
        work: impl FnOnce() -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        self.reporter.sub_task(phase.label);
        let value = work()?;
        let units = phase.units.min(self.remaining);
        self.remaining -= units;
        self.reporter.worked(units);
        Ok(value)
    }
}

impl Drop for WeightedProgress<'_> {
    fn drop(&mut self) {
        self.reporter.done();
    }
}
