//! Preference store persisted as a TOML file.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, DeployType, Project};
use crate::ports::PreferenceStore;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    heroku_auto_publish: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    application_id: Option<String>,
    #[serde(default)]
    projects: BTreeMap<String, ProjectPreferences>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProjectPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deploy_type: Option<DeployType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deploy_endpoint: Option<String>,
    /// RFC 3339 timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_deployed: Option<String>,
}

/// File-backed store; every write is flushed to disk before returning.
#[derive(Debug)]
pub struct TomlPreferenceStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl TomlPreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path, lock: Mutex::new(()) }
    }

    fn load(&self) -> Result<PreferencesFile, AppError> {
        if !self.path.exists() {
            return Ok(PreferencesFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| {
            AppError::PreferencesError(format!("{}: {}", self.path.display(), e))
        })
    }

    fn save(&self, prefs: &PreferencesFile) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(prefs)?)?;
        Ok(())
    }

    fn read<T>(&self, f: impl FnOnce(&PreferencesFile) -> T) -> Result<T, AppError> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        Ok(f(&self.load()?))
    }

    fn update(&self, f: impl FnOnce(&mut PreferencesFile)) -> Result<(), AppError> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        let mut prefs = self.load()?;
        f(&mut prefs);
        self.save(&prefs)
    }

    fn update_project(
        &self,
        project: &Project,
        f: impl FnOnce(&mut ProjectPreferences),
    ) -> Result<(), AppError> {
        self.update(|prefs| f(prefs.projects.entry(project.preference_key()).or_default()))
    }

    fn read_project<T>(
        &self,
        project: &Project,
        f: impl FnOnce(&ProjectPreferences) -> Option<T>,
    ) -> Result<Option<T>, AppError> {
        self.read(|prefs| prefs.projects.get(&project.preference_key()).and_then(f))
    }
}

fn poisoned() -> AppError {
    AppError::PreferencesError("preference lock poisoned".to_string())
}

impl PreferenceStore for TomlPreferenceStore {
    fn set_deploy_type(&self, project: &Project, deploy_type: DeployType) -> Result<(), AppError> {
        self.update_project(project, |p| p.deploy_type = Some(deploy_type))
    }

    fn deploy_type(&self, project: &Project) -> Result<Option<DeployType>, AppError> {
        self.read_project(project, |p| p.deploy_type)
    }

    fn set_deploy_endpoint(&self, project: &Project, endpoint: &str) -> Result<(), AppError> {
        self.update_project(project, |p| p.deploy_endpoint = Some(endpoint.to_string()))
    }

    fn deploy_endpoint(&self, project: &Project) -> Result<Option<String>, AppError> {
        self.read_project(project, |p| p.deploy_endpoint.clone())
    }

    fn set_last_deployed(&self, project: &Project, at: DateTime<Utc>) -> Result<(), AppError> {
        self.update_project(project, |p| p.last_deployed = Some(at.to_rfc3339()))
    }

    fn last_deployed(&self, project: &Project) -> Result<Option<DateTime<Utc>>, AppError> {
        self.read_project(project, |p| {
            p.last_deployed
                .as_deref()
                .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                .map(|at| at.with_timezone(&Utc))
        })
    }

    fn set_auto_publish(&self, enabled: bool) -> Result<(), AppError> {
        self.update(|prefs| prefs.heroku_auto_publish = enabled)
    }

    fn auto_publish(&self) -> Result<bool, AppError> {
        self.read(|prefs| prefs.heroku_auto_publish)
    }

    fn application_id(&self) -> Result<Option<String>, AppError> {
        self.read(|prefs| prefs.application_id.clone())
    }

    fn set_application_id(&self, id: &str) -> Result<(), AppError> {
        self.update(|prefs| prefs.application_id = Some(id.to_string()))
    }
}
