//! deploy-wizard: commit a local project and deploy it to Heroku or Red Hat
//! cloud, with a guided Heroku signup.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DeployStatus, DeployWizard, FinishOutcome, FinishedPage, PageKind, bundles, create_context,
    load_config, open_project, status,
};
pub use app::wizard::{HerokuDeployWizard, RedHatDeployWizard};
pub use app::{AppContext, AppPorts};
pub use domain::{
    AppConfig, AppError, AppName, AuthStatus, DeployRequest, DeployType, Project,
    RedHatDeployRequest, SignupRequest, UserId,
};
