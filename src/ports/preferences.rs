use chrono::{DateTime, Utc};

use crate::domain::{AppError, DeployType, Project};

/// Port for per-project deploy preferences and process-wide flags.
///
/// Each project holds at most one deploy type; the last write wins.
pub trait PreferenceStore: Send + Sync {
    fn set_deploy_type(&self, project: &Project, deploy_type: DeployType) -> Result<(), AppError>;

    fn deploy_type(&self, project: &Project) -> Result<Option<DeployType>, AppError>;

    fn set_deploy_endpoint(&self, project: &Project, endpoint: &str) -> Result<(), AppError>;

    fn deploy_endpoint(&self, project: &Project) -> Result<Option<String>, AppError>;

    fn set_last_deployed(&self, project: &Project, at: DateTime<Utc>) -> Result<(), AppError>;

    fn last_deployed(&self, project: &Project) -> Result<Option<DateTime<Utc>>, AppError>;

    /// Persist the Heroku "publish immediately" toggle.
    fn set_auto_publish(&self, enabled: bool) -> Result<(), AppError>;

    fn auto_publish(&self) -> Result<bool, AppError>;

    fn application_id(&self) -> Result<Option<String>, AppError>;

    fn set_application_id(&self, id: &str) -> Result<(), AppError>;
}
