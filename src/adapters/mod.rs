pub mod bundle_registry;
pub mod git2_repository;
pub mod heroku_api;
pub mod http_ping_client;
pub mod process_command_executor;
pub mod progress_reporters;
pub mod redhat_cli;
pub mod system_browser;
pub mod toml_preference_store;
pub mod ui_thread;

pub use bundle_registry::FilesystemBundleRegistry;
pub use git2_repository::Git2RepositoryManager;
pub use heroku_api::HerokuApi;
pub use http_ping_client::HttpPingClient;
pub use process_command_executor::ProcessCommandExecutor;
pub use progress_reporters::{TerminalProgress, TracingProgress};
pub use redhat_cli::RedHatCli;
pub use system_browser::SystemBrowser;
pub use toml_preference_store::TomlPreferenceStore;
pub use ui_thread::UiThread;
