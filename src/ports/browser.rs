//! Browser view ports.

use std::sync::Arc;

use url::Url;

use crate::domain::AppError;

/// Chrome shown around an opened browser view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrowserStyle {
    pub navigation_bar: bool,
    pub location_bar: bool,
    pub status: bool,
}

impl BrowserStyle {
    pub const FULL_CHROME: BrowserStyle =
        BrowserStyle { navigation_bar: true, location_bar: true, status: true };
}

/// Page load progress notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    Changed { current: u32, total: u32 },
    Completed,
}

/// Returned by a listener to stay registered or unregister itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerControl {
    Keep,
    Remove,
}

/// Executes scripts in the current page.
pub trait ScriptHost {
    /// Returns `false` when the page rejected the script.
    fn execute(&self, script: &str) -> bool;
}

pub type LoadListener = Box<dyn FnMut(&ProgressEvent, &dyn ScriptHost) -> ListenerControl + Send>;

/// Underlying browser control of a view.
pub trait BrowserHandle: ScriptHost + Send + Sync {
    fn add_progress_listener(&self, listener: LoadListener);
}

/// An opened browser view.
pub trait BrowserView: Send + Sync {
    fn session_id(&self) -> &str;

    fn url(&self) -> Url;

    /// Access to the page control, if this view exposes one.
    fn browser_handle(&self) -> Option<&dyn BrowserHandle>;
}

/// Port for opening browser views keyed by session id.
pub trait BrowserSupport: Send + Sync {
    /// Open `url` in the view for `session_id`, reusing an existing view for
    /// the same session.
    fn open(
        &self,
        url: &Url,
        style: BrowserStyle,
        session_id: &str,
    ) -> Result<Arc<dyn BrowserView>, AppError>;
}
