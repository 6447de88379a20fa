mod browser;
mod cloud;
mod command_registry;
mod git;
mod ping;
mod preferences;
mod progress;
mod ui_dispatch;

pub use browser::{
    BrowserHandle, BrowserStyle, BrowserSupport, BrowserView, ListenerControl, LoadListener,
    ProgressEvent, ScriptHost,
};
pub use cloud::{AppProvisioner, Authenticator, HerokuAccount};
pub use command_registry::{
    BundleElement, BundleEntry, CommandContext, CommandElement, CommandExecutor, CommandRegistry,
};
pub use git::{GitRepository, GitRepositoryManager};
pub use ping::{PingClient, PingResponse};
pub use preferences::PreferenceStore;
pub use progress::{NoopProgress, ProgressReporter};
pub use ui_dispatch::{UiDispatcher, UiTask};
