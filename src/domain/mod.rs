mod auth;
pub mod config;
mod deploy_type;
mod error;
pub mod progress;
mod project;
mod request;

pub use auth::AuthStatus;
pub use config::{AppConfig, ConfigFile, GitConfig, HerokuConfig, RedHatConfig, SignupConfig};
pub use deploy_type::DeployType;
pub use error::AppError;
pub use progress::Phase;
pub use project::Project;
pub use request::{AppName, DeployRequest, RedHatDeployRequest, SignupRequest, UserId};
