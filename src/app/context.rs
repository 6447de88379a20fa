use std::sync::Arc;

use crate::domain::AppConfig;
use crate::ports::{
    AppProvisioner, BrowserSupport, CommandExecutor, CommandRegistry, GitRepositoryManager,
    HerokuAccount, PingClient, PreferenceStore, ProgressReporter, UiDispatcher,
};

/// Collaborators injected into the wizards.
#[derive(Clone)]
pub struct AppPorts {
    pub git: Arc<dyn GitRepositoryManager>,
    pub registry: Arc<dyn CommandRegistry>,
    pub executor: Arc<dyn CommandExecutor>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub ping: Arc<dyn PingClient>,
    pub browser: Arc<dyn BrowserSupport>,
    pub ui: Arc<dyn UiDispatcher>,
    pub progress: Arc<dyn ProgressReporter>,
    pub heroku: Arc<dyn HerokuAccount>,
    pub redhat: Arc<dyn AppProvisioner>,
}

/// Application context holding configuration and dependencies for command
/// execution. Cheap to clone; clones share the same collaborators.
#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    ports: AppPorts,
}

impl AppContext {
    /// Create a new application context.
    pub fn new(config: AppConfig, ports: AppPorts) -> Self {
        Self { config: Arc::new(config), ports }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn git(&self) -> &dyn GitRepositoryManager {
        self.ports.git.as_ref()
    }

    pub fn registry(&self) -> Arc<dyn CommandRegistry> {
        Arc::clone(&self.ports.registry)
    }

    pub fn executor(&self) -> Arc<dyn CommandExecutor> {
        Arc::clone(&self.ports.executor)
    }

    pub fn preferences(&self) -> &dyn PreferenceStore {
        self.ports.preferences.as_ref()
    }

    pub fn ping(&self) -> &dyn PingClient {
        self.ports.ping.as_ref()
    }

    pub fn browser(&self) -> Arc<dyn BrowserSupport> {
        Arc::clone(&self.ports.browser)
    }

    pub fn ui(&self) -> &dyn UiDispatcher {
        self.ports.ui.as_ref()
    }

    pub fn progress(&self) -> &dyn ProgressReporter {
        self.ports.progress.as_ref()
    }

    pub fn heroku(&self) -> &dyn HerokuAccount {
        self.ports.heroku.as_ref()
    }

    pub fn redhat(&self) -> Arc<dyn AppProvisioner> {
        Arc::clone(&self.ports.redhat)
    }
}
