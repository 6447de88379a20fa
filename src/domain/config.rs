//! Configuration models loaded from `config.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use super::AppError;

/// Directory under `$HOME` holding configuration, preferences and bundles.
pub const CONFIG_DIR: &str = ".config/deploy-wizard";

/// Raw configuration file contents; path fields default relative to `$HOME`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub heroku: HerokuSection,
    #[serde(default)]
    pub signup: SignupSection,
    #[serde(default)]
    pub git: GitConfig,
    #[serde(default)]
    pub redhat: RedHatConfig,
    #[serde(default)]
    pub paths: PathsSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HerokuSection {
    #[serde(default = "default_heroku_bundle")]
    pub bundle: String,
    #[serde(default = "default_create_command")]
    pub create_command: String,
    #[serde(default = "default_create_and_deploy_command")]
    pub create_and_deploy_command: String,
    #[serde(default = "default_app_name_key")]
    pub app_name_key: String,
    #[serde(default = "default_heroku_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for HerokuSection {
    fn default() -> Self {
        Self {
            bundle: default_heroku_bundle(),
            create_command: default_create_command(),
            create_and_deploy_command: default_create_and_deploy_command(),
            app_name_key: default_app_name_key(),
            api_url: default_heroku_api_url(),
            credentials_file: None,
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignupSection {
    #[serde(default = "default_ping_host")]
    pub ping_host: String,
    #[serde(default = "default_signup_url")]
    pub signup_url: String,
    #[serde(default = "default_browser_id")]
    pub browser_id: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for SignupSection {
    fn default() -> Self {
        Self {
            ping_host: default_ping_host(),
            signup_url: default_signup_url(),
            browser_id: default_browser_id(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Identity and message used for the automatic pre-deploy commit.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitConfig {
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
    #[serde(default = "default_author_name")]
    pub author_name: String,
    #[serde(default = "default_author_email")]
    pub author_email: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            commit_message: default_commit_message(),
            author_name: default_author_name(),
            author_email: default_author_email(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedHatConfig {
    /// Red Hat cloud command line client.
    #[serde(default = "default_redhat_program")]
    pub program: String,
    /// Leading arguments placed before every subcommand.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for RedHatConfig {
    fn default() -> Self {
        Self { program: default_redhat_program(), args: Vec::new() }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    #[serde(default)]
    pub bundles_dir: Option<PathBuf>,
    #[serde(default)]
    pub preferences_file: Option<PathBuf>,
}

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub heroku: HerokuConfig,
    pub signup: SignupConfig,
    pub git: GitConfig,
    pub redhat: RedHatConfig,
    pub bundles_dir: PathBuf,
    pub preferences_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct HerokuConfig {
    pub bundle: String,
    pub create_command: String,
    pub create_and_deploy_command: String,
    pub app_name_key: String,
    pub api_url: Url,
    pub credentials_file: PathBuf,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SignupConfig {
    pub ping_host: Url,
    pub signup_url: Url,
    pub browser_id: String,
    pub timeout_secs: u64,
}

impl ConfigFile {
    /// Parse `config.toml` content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve defaults that depend on the home directory and validate URLs.
    pub fn resolve(self, home: &Path) -> Result<AppConfig, AppError> {
        let config_dir = home.join(CONFIG_DIR);
        let heroku = HerokuConfig {
            api_url: parse_url("heroku.api_url", &self.heroku.api_url)?,
            credentials_file: self
                .heroku
                .credentials_file
                .unwrap_or_else(|| home.join(".heroku").join("credentials")),
            bundle: self.heroku.bundle,
            create_command: self.heroku.create_command,
            create_and_deploy_command: self.heroku.create_and_deploy_command,
            app_name_key: self.heroku.app_name_key,
            timeout_secs: self.heroku.timeout_secs,
        };
        let signup = SignupConfig {
            ping_host: parse_url("signup.ping_host", &self.signup.ping_host)?,
            signup_url: parse_url("signup.signup_url", &self.signup.signup_url)?,
            browser_id: self.signup.browser_id,
            timeout_secs: self.signup.timeout_secs,
        };

        Ok(AppConfig {
            heroku,
            signup,
            git: self.git,
            redhat: self.redhat,
            bundles_dir: self.paths.bundles_dir.unwrap_or_else(|| config_dir.join("bundles")),
            preferences_file: self
                .paths
                .preferences_file
                .unwrap_or_else(|| config_dir.join("preferences.toml")),
        })
    }
}

impl AppConfig {
    /// Default configuration rooted at `home`.
    pub fn with_home(home: &Path) -> Result<Self, AppError> {
        ConfigFile::default().resolve(home)
    }
}

impl HerokuConfig {
    /// Registry command selected by the publish toggle.
    pub fn command_name(&self, publish_immediately: bool) -> &str {
        if publish_immediately { &self.create_and_deploy_command } else { &self.create_command }
    }
}

fn parse_url(field: &str, value: &str) -> Result<Url, AppError> {
    Url::parse(value).map_err(|e| AppError::config_error(format!("Invalid URL for {}: {}", field, e)))
}

fn default_heroku_bundle() -> String {
    "Heroku".to_string()
}

fn default_create_command() -> String {
    "Create App".to_string()
}

fn default_create_and_deploy_command() -> String {
    "Create and Deploy App".to_string()
}

fn default_app_name_key() -> String {
    "HEROKU_APP_NAME".to_string()
}

fn default_heroku_api_url() -> String {
    "https://api.heroku.com".to_string()
}

fn default_ping_host() -> String {
    "http://toolbox.aptana.com".to_string()
}

fn default_signup_url() -> String {
    "https://api.heroku.com/signup/aptana3".to_string()
}

fn default_browser_id() -> String {
    "heroku-signup".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_commit_message() -> String {
    "Automatic commit before deploy".to_string()
}

fn default_author_name() -> String {
    "deploy-wizard".to_string()
}

fn default_author_email() -> String {
    "deploy-wizard@localhost".to_string()
}

fn default_redhat_program() -> String {
    "rhc".to_string()
}
