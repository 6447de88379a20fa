//! Cloud provider ports.

use crate::domain::{AppError, AuthStatus, RedHatDeployRequest, UserId};

/// Anything that can check whether stored credentials are accepted.
pub trait Authenticator {
    fn provider_name(&self) -> &str;

    /// Query stored credentials against the provider.
    fn authenticate(&self) -> Result<AuthStatus, AppError>;
}

/// Heroku account backed by a local credentials file.
pub trait HerokuAccount: Authenticator + Send + Sync {
    /// Whether a credentials file is present at all.
    fn has_credentials(&self) -> bool;

    /// Verify `email`/`api_key` and persist them as the stored credentials.
    fn login(&self, email: &UserId, api_key: &str) -> Result<AuthStatus, AppError>;
}

/// Provider that provisions applications directly.
pub trait AppProvisioner: Authenticator + Send + Sync {
    fn create_app(&self, request: &RedHatDeployRequest) -> Result<(), AppError>;
}
