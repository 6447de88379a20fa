//! Configuration loading from the HOME-based config directory.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::config::CONFIG_DIR;
use crate::domain::{AppConfig, AppError, ConfigFile};

pub const CONFIG_FILE: &str = "config.toml";

/// `$HOME`, used for every default path so tests can redirect it.
pub fn home_dir() -> Result<PathBuf, AppError> {
    env::var("HOME")
        .map(PathBuf::from)
        .map_err(|_| AppError::config_error("HOME environment variable not set"))
}

/// Load `$HOME/.config/deploy-wizard/config.toml`, or `explicit` when given.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    load_config_from(&home_dir()?, explicit)
}

/// A missing default file yields built-in defaults; a missing explicit file is
/// an error.
pub fn load_config_from(home: &Path, explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| home.join(CONFIG_DIR).join(CONFIG_FILE));

    let file = match fs::read_to_string(&path) {
        Ok(content) => {
            debug!(path = %path.display(), "loaded configuration");
            ConfigFile::parse(&content)?
        }
        Err(e) if e.kind() == ErrorKind::NotFound && explicit.is_none() => ConfigFile::default(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Err(e) => return Err(e.into()),
    };
    file.resolve(home)
}
