mod fake_browser;
mod fake_cloud;
mod fake_git;
mod fake_ping;
mod fake_registry;
mod harness;
mod inline_ui;
mod log_capture;

#[allow(unused_imports)]
pub use fake_browser::{FakeBrowser, FakeBrowserHandle, FakeView};
pub use fake_cloud::{FakeHerokuAccount, FakeProvisioner};
pub use fake_git::FakeGit;
pub use fake_ping::FakePing;
#[allow(unused_imports)]
pub use fake_registry::{ExecutedCommand, FakeRegistry, RecordingExecutor};
pub use harness::TestHarness;
pub use inline_ui::{InlineUi, RecordingProgress};
pub use log_capture::{capture_levels, count_level};
pub use memory_preferences::MemoryPreferences;
