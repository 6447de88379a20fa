//! API facade: builds the production context and exposes the operations the
//! CLI drives.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Arc;

use crate::adapters::{
    FilesystemBundleRegistry, Git2RepositoryManager, HerokuApi, HttpPingClient,
    ProcessCommandExecutor, RedHatCli, SystemBrowser, TerminalProgress, TomlPreferenceStore,
    TracingProgress, UiThread,
};
use crate::app::commands::status::{deploy_status, list_bundles};
use crate::app::context::{AppContext, AppPorts};
use crate::app::wizard::{HerokuDeployWizard, RedHatDeployWizard};
use crate::domain::{AppConfig, Project};
use crate::ports::ProgressReporter;

pub use crate::app::commands::status::DeployStatus;
pub use crate::app::config::load_config;
pub use crate::app::wizard::{DeployWizard, FinishOutcome, FinishedPage, PageKind};
pub use crate::domain::AppError;

/// Wire the real adapters behind every port.
pub fn create_context(config: AppConfig) -> Result<AppContext, AppError> {
    let progress: Arc<dyn ProgressReporter> = if io::stderr().is_terminal() {
        Arc::new(TerminalProgress::new())
    } else {
        Arc::new(TracingProgress)
    };

    let ports = AppPorts {
        git: Arc::new(Git2RepositoryManager::new(&config.git)),
        registry: Arc::new(FilesystemBundleRegistry::new(config.bundles_dir.clone())),
        executor: Arc::new(ProcessCommandExecutor::new()),
        preferences: Arc::new(TomlPreferenceStore::new(config.preferences_file.clone())),
        ping: Arc::new(HttpPingClient::new(config.signup.timeout_secs)?),
        browser: Arc::new(SystemBrowser::new()),
        ui: Arc::new(UiThread::spawn()?),
        progress,
        heroku: Arc::new(HerokuApi::new(&config.heroku)?),
        redhat: Arc::new(RedHatCli::new(&config.redhat)),
    };
    Ok(AppContext::new(config, ports))
}

/// Resolve the project at `path`, or the current directory.
pub fn open_project(path: Option<&Path>) -> Result<Project, AppError> {
    match path {
        Some(path) => Project::open(path),
        None => Project::open(&std::env::current_dir()?),
    }
}

pub fn heroku_wizard(ctx: AppContext, project: Option<Project>) -> HerokuDeployWizard {
    HerokuDeployWizard::new(ctx, project)
}

pub fn redhat_wizard(ctx: AppContext, project: Option<Project>) -> RedHatDeployWizard {
    RedHatDeployWizard::new(ctx, project)
}

/// Stored deploy settings for a project. Only touches the preference file.
pub fn status(config: &AppConfig, project: &Project) -> Result<DeployStatus, AppError> {
    let preferences = TomlPreferenceStore::new(config.preferences_file.clone());
    deploy_status(&preferences, project)
}

/// Bundle names and their commands from the configured bundles directory.
pub fn bundles(config: &AppConfig) -> Result<Vec<(String, Vec<String>)>, AppError> {
    list_bundles(&FilesystemBundleRegistry::new(config.bundles_dir.clone()))
}
