//! Stored deploy settings for a project.

use chrono::{DateTime, Utc};

use crate::domain::{AppError, DeployType, Project};
use crate::ports::{BundleEntry, CommandRegistry, PreferenceStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployStatus {
    pub project: Project,
    pub deploy_type: Option<DeployType>,
    pub endpoint: Option<String>,
    pub last_deployed: Option<DateTime<Utc>>,
    pub auto_publish: bool,
}

pub fn deploy_status(
    preferences: &dyn PreferenceStore,
    project: &Project,
) -> Result<DeployStatus, AppError> {
    Ok(DeployStatus {
        project: project.clone(),
        deploy_type: preferences.deploy_type(project)?,
        endpoint: preferences.deploy_endpoint(project)?,
        last_deployed: preferences.last_deployed(project)?,
        auto_publish: preferences.auto_publish()?,
    })
}

/// Bundle names with their command names, in registry order.
pub fn list_bundles(registry: &dyn CommandRegistry) -> Result<Vec<(String, Vec<String>)>, AppError> {
    Ok(registry
        .bundle_entries()?
        .into_iter()
        .map(|BundleEntry { name, contributing_bundles }| {
            let mut commands: Vec<String> = Vec::new();
            for command in contributing_bundles.iter().flat_map(|b| b.commands.iter()) {
                if !commands.contains(&command.name) {
                    commands.push(command.name.clone());
                }
            }
            (name, commands)
        })
        .collect())
}
