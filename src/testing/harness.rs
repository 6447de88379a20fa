use std::path::Path;
use std::sync::Arc;

use super::{
    FakeBrowser, FakeGit, FakeHerokuAccount, FakePing, FakeProvisioner, FakeRegistry, InlineUi,
    MemoryPreferences, RecordingExecutor, RecordingProgress,
};
use crate::app::context::{AppContext, AppPorts};
use crate::domain::{AppConfig, AuthStatus};
use crate::ports::UiDispatcher;

/// All fakes wired into one context. Fields stay reachable for assertions
/// after the context has been handed out.
pub struct TestHarness {
    pub config: AppConfig,
    pub git: FakeGit,
    pub registry: Arc<FakeRegistry>,
    pub executor: Arc<RecordingExecutor>,
    pub preferences: Arc<MemoryPreferences>,
    pub ping: Arc<FakePing>,
    pub browser: Arc<FakeBrowser>,
    pub ui: Arc<InlineUi>,
    pub progress: Arc<RecordingProgress>,
    pub heroku: Arc<FakeHerokuAccount>,
    pub redhat: Arc<FakeProvisioner>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            config: AppConfig::with_home(Path::new("/home/test")).unwrap(),
            git: FakeGit::new(),
            registry: Arc::new(FakeRegistry::new()),
            executor: Arc::new(RecordingExecutor::new()),
            preferences: Arc::new(MemoryPreferences::new()),
            ping: Arc::new(FakePing::responding(200, "")),
            browser: Arc::new(FakeBrowser::new()),
            ui: Arc::new(InlineUi::default()),
            progress: Arc::new(RecordingProgress::default()),
            heroku: Arc::new(FakeHerokuAccount::new(true, AuthStatus::Authenticated)),
            redhat: Arc::new(FakeProvisioner::new(AuthStatus::Authenticated)),
        }
    }

    pub fn with_heroku(mut self, account: FakeHerokuAccount) -> Self {
        self.heroku = Arc::new(account);
        self
    }

    pub fn with_redhat(mut self, provisioner: FakeProvisioner) -> Self {
        self.redhat = Arc::new(provisioner);
        self
    }

    pub fn with_preferences(mut self, preferences: MemoryPreferences) -> Self {
        self.preferences = Arc::new(preferences);
        self
    }

    pub fn with_executor(mut self, executor: RecordingExecutor) -> Self {
        self.executor = Arc::new(executor);
        self
    }

    /// Register both Heroku bundle commands under their default names.
    pub fn registry_with_heroku_commands(&self) {
        self.registry.add_command(&self.config.heroku.bundle, &self.config.heroku.create_command);
        self.registry
            .add_command(&self.config.heroku.bundle, &self.config.heroku.create_and_deploy_command);
    }

    pub fn context(&self) -> AppContext {
        self.context_with_ui(self.ui.clone())
    }

    pub fn context_with_ui(&self, ui: Arc<dyn UiDispatcher>) -> AppContext {
        AppContext::new(
            self.config.clone(),
            AppPorts {
                git: Arc::new(self.git.clone()),
                registry: self.registry.clone(),
                executor: self.executor.clone(),
                preferences: self.preferences.clone(),
                ping: self.ping.clone(),
                browser: self.browser.clone(),
                ui,
                progress: self.progress.clone(),
                heroku: self.heroku.clone(),
                redhat: self.redhat.clone(),
            },
        )
    }
}
