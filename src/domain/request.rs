//! Single-use requests built from wizard input.

use std::fmt;
use std::path::PathBuf;

use super::AppError;

/// Validated remote application name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    pub fn new(value: &str) -> Result<Self, AppError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(AppError::InvalidAppName(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Heroku deploy page input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    pub app_name: AppName,
    pub publish_immediately: bool,
}

impl DeployRequest {
    pub fn new(app_name: AppName, publish_immediately: bool) -> Self {
        Self { app_name, publish_immediately }
    }
}

/// Red Hat deploy page input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedHatDeployRequest {
    pub app_name: AppName,
    /// Provider cartridge type, e.g. `php-5.3`.
    pub app_type: String,
    pub destination: PathBuf,
}

/// E-mail shaped user identifier collected on the signup page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: &str) -> Result<Self, AppError> {
        let trimmed = value.trim();
        let valid = match trimmed.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !trimmed.chars().any(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(AppError::InvalidUserId(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Signup page input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub user_id: UserId,
}

impl SignupRequest {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
