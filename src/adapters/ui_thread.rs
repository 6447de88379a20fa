//! Dedicated thread that owns all UI-affecting work.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle, ThreadId};

use tracing::error;

use crate::domain::AppError;
use crate::ports::{UiDispatcher, UiTask};

struct Job {
    task: UiTask,
    done: Option<Sender<bool>>,
}

/// Runs queued tasks one at a time on a single named thread.
///
/// Blocking dispatch from the UI thread itself runs the task inline.
pub struct UiThread {
    sender: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
    thread_id: ThreadId,
}

impl UiThread {
    pub fn spawn() -> Result<Self, AppError> {
        let (sender, receiver) = mpsc::channel::<Job>();
        let handle = thread::Builder::new().name("ui".to_string()).spawn(move || {
            for job in receiver {
                let ok = run_guarded(job.task);
                if let Some(done) = job.done {
                    let _ = done.send(ok);
                }
            }
        })?;
        let thread_id = handle.thread().id();
        Ok(Self { sender: Some(sender), handle: Some(handle), thread_id })
    }

    fn is_ui_thread(&self) -> bool {
        thread::current().id() == self.thread_id
    }

    fn send(&self, job: Job) -> Result<(), AppError> {
        self.sender
            .as_ref()
            .ok_or_else(|| AppError::DispatchError("UI thread stopped".to_string()))?
            .send(job)
            .map_err(|_| AppError::DispatchError("UI thread stopped".to_string()))
    }
}

fn run_guarded(task: UiTask) -> bool {
    match catch_unwind(AssertUnwindSafe(task)) {
        Ok(()) => true,
        Err(_) => {
            error!("UI task panicked");
            false
        }
    }
}

impl UiDispatcher for UiThread {
    fn sync_exec(&self, task: UiTask) -> Result<(), AppError> {
        if self.is_ui_thread() {
            return if run_guarded(task) {
                Ok(())
            } else {
                Err(AppError::DispatchError("UI task panicked".to_string()))
            };
        }

        let (done, finished) = mpsc::channel();
        self.send(Job { task, done: Some(done) })?;
        match finished.recv() {
            Ok(true) => Ok(()),
            Ok(false) => Err(AppError::DispatchError("UI task panicked".to_string())),
            Err(_) => Err(AppError::DispatchError("UI thread stopped".to_string())),
        }
    }

    fn async_exec(&self, task: UiTask) -> Result<(), AppError> {
        self.send(Job { task, done: None })
    }
}

impl Drop for UiThread {
    /// Drains queued tasks before the thread exits.
    fn drop(&mut self) {
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            if !self.is_ui_thread() {
                let _ = handle.join();
            }
        }
    }
}
