//! Heroku platform API client backed by the local credentials file.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, info};
use url::Url;

use crate::domain::{AppError, AuthStatus, HerokuConfig, UserId};
use crate::ports::{Authenticator, HerokuAccount};

const ACCEPT_V3: &str = "application/vnd.heroku+json; version=3";
const PROVIDER: &str = "Heroku";

/// E-mail and API key, one per line in the credentials file.
#[derive(Clone, PartialEq, Eq)]
pub struct HerokuCredentials {
    pub email: String,
    pub api_key: String,
}

impl fmt::Debug for HerokuCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HerokuCredentials")
            .field("email", &self.email)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HerokuCredentials {
    pub fn parse(content: &str) -> Option<Self> {
        let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());
        let email = lines.next()?.to_string();
        let api_key = lines.next()?.to_string();
        Some(Self { email, api_key })
    }

    fn render(&self) -> String {
        format!("{}\n{}\n", self.email, self.api_key)
    }
}

#[derive(Clone)]
pub struct HerokuApi {
    api_url: Url,
    credentials_file: PathBuf,
    client: Client,
}

impl fmt::Debug for HerokuApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HerokuApi")
            .field("api_url", &self.api_url)
            .field("credentials_file", &self.credentials_file)
            .finish()
    }
}

impl HerokuApi {
    pub fn new(config: &HerokuConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::HttpError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            api_url: config.api_url.clone(),
            credentials_file: config.credentials_file.clone(),
            client,
        })
    }

    pub fn credentials_file(&self) -> &Path {
        &self.credentials_file
    }

    /// Read stored credentials; `None` when the file is missing or incomplete.
    pub fn read_credentials(&self) -> Result<Option<HerokuCredentials>, AppError> {
        if !self.credentials_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.credentials_file)?;
        Ok(HerokuCredentials::parse(&content))
    }

    fn account_url(&self) -> Result<Url, AppError> {
        self.api_url
            .join("account")
            .map_err(|e| AppError::config_error(format!("Invalid Heroku API URL: {}", e)))
    }

    fn verify(&self, credentials: &HerokuCredentials) -> Result<AuthStatus, AppError> {
        let response = self
            .client
            .get(self.account_url()?)
            .header(ACCEPT, ACCEPT_V3)
            .basic_auth(&credentials.email, Some(&credentials.api_key))
            .send()
            .map_err(|e| AppError::HttpError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "heroku account check");
        match status {
            s if s.is_success() => Ok(AuthStatus::Authenticated),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Ok(AuthStatus::unauthenticated("Heroku rejected the stored credentials"))
            }
            s => Err(AppError::HttpError {
                message: extract_error_message(&response.text().unwrap_or_default())
                    .unwrap_or_else(|| "Heroku account check failed".to_string()),
                status: Some(s.as_u16()),
            }),
        }
    }

    fn write_credentials(&self, credentials: &HerokuCredentials) -> Result<(), AppError> {
        if let Some(parent) = self.credentials_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.credentials_file)?;

        // `mode` only applies on creation; tighten a pre-existing file before writing.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(credentials.render().as_bytes())?;
        Ok(())
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed.get("message").and_then(|m| m.as_str()).map(ToOwned::to_owned)
}

impl Authenticator for HerokuApi {
    fn provider_name(&self) -> &str {
        PROVIDER
    }

    fn authenticate(&self) -> Result<AuthStatus, AppError> {
        match self.read_credentials()? {
            Some(credentials) => self.verify(&credentials),
            None => Ok(AuthStatus::unauthenticated("No Heroku credentials stored")),
        }
    }
}

impl HerokuAccount for HerokuApi {
    fn has_credentials(&self) -> bool {
        self.credentials_file.exists()
    }

    fn login(&self, email: &UserId, api_key: &str) -> Result<AuthStatus, AppError> {
        let credentials =
            HerokuCredentials { email: email.as_str().to_string(), api_key: api_key.trim().to_string() };
        let status = self.verify(&credentials)?;
        if status.is_ok() {
            self.write_credentials(&credentials)?;
            info!(path = %self.credentials_file.display(), "stored Heroku credentials");
        }
        Ok(status)
    }
}
