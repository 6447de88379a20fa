use std::sync::mpsc;

use crate::domain::AppError;
use crate::ports::UiDispatcher;

/// Run `work` on the UI thread, wait for it, and hand back its result.
pub fn sync_call<T, F>(ui: &dyn UiDispatcher, work: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    ui.sync_exec(Box::new(move || {
        let _ = sender.send(work());
    }))?;
    receiver
        .recv()
        .map_err(|_| AppError::DispatchError("UI task finished without a result".to_string()))
}
