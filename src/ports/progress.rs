/// Port for user-facing progress feedback.
pub trait ProgressReporter: Send + Sync {
    fn begin(&self, task: &str, total_units: u64);

    fn sub_task(&self, label: &str);

    fn worked(&self, units: u64);

    fn done(&self);
}

/// Reporter that discards all feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn begin(&self, _task: &str, _total_units: u64) {}

    fn sub_task(&self, _label: &str) {}

    fn worked(&self, _units: u64) {}

    fn done(&self) {}
}
