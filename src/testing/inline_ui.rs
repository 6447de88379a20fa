use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{ProgressReporter, UiDispatcher, UiTask};

/// Dispatcher that runs tasks on the calling thread and records the mode.
#[derive(Default)]
pub struct InlineUi {
    calls: Mutex<Vec<&'static str>>,
}

impl InlineUi {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl UiDispatcher for InlineUi {
    fn sync_exec(&self, task: UiTask) -> Result<(), AppError> {
        self.calls.lock().unwrap().push("sync");
        task();
        Ok(())
    }

    fn async_exec(&self, task: UiTask) -> Result<(), AppError> {
        self.calls.lock().unwrap().push("async");
        task();
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingProgress {
    fn begin(&self, task: &str, total_units: u64) {
        self.events.lock().unwrap().push(format!("begin:{}:{}", task, total_units));
    }

    fn sub_task(&self, label: &str) {
        self.events.lock().unwrap().push(format!("sub:{}", label));
    }

    fn worked(&self, units: u64) {
        self.events.lock().unwrap().push(format!("worked:{}", units));
    }

    fn done(&self) {
        self.events.lock().unwrap().push("done".to_string());
    }
}
