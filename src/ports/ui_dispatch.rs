use crate::domain::AppError;

pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// Port for marshaling work onto the single UI-owning thread.
pub trait UiDispatcher: Send + Sync {
    /// Run `task` on the UI thread and wait for it to finish.
    fn sync_exec(&self, task: UiTask) -> Result<(), AppError>;

    /// Queue `task` on the UI thread and return immediately.
    fn async_exec(&self, task: UiTask) -> Result<(), AppError>;
}
