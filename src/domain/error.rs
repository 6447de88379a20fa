use std::io;

use thiserror::Error;

/// Library-wide error type for deploy-wizard operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Application name is empty or malformed.
    #[error("Invalid app name '{0}': must be non-empty and contain no whitespace")]
    InvalidAppName(String),

    /// User identifier is not e-mail shaped.
    #[error("Invalid user id '{0}': expected an e-mail address")]
    InvalidUserId(String),

    /// Project directory does not exist.
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Git operation failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// HTTP transport or status failure.
    #[error("HTTP error: {message}")]
    HttpError { message: String, status: Option<u16> },

    /// Bundle manifest could not be parsed.
    #[error("Invalid bundle '{bundle}': {reason}")]
    InvalidBundle { bundle: String, reason: String },

    /// Bundle command execution failed.
    #[error("Command '{command}' failed: {details}")]
    CommandError { command: String, details: String },

    /// Cloud provider rejected a request.
    #[error("{provider} error: {message}")]
    CloudError { provider: String, message: String },

    /// Browser view could not be opened or driven.
    #[error("Browser error: {0}")]
    BrowserError(String),

    /// Preference store could not be read or written.
    #[error("Preference store error: {0}")]
    PreferencesError(String),

    /// Work could not be handed to the UI thread.
    #[error("UI dispatch failed: {0}")]
    DispatchError(String),

    /// User input failed validation or could not be read.
    #[error("{0}")]
    Validation(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn git<C: Into<String>, D: ToString>(command: C, details: D) -> Self {
        AppError::GitError { command: command.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidAppName(_)
            | AppError::InvalidUserId(_)
            | AppError::InvalidBundle { .. }
            | AppError::Validation(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ProjectNotFound(_) => io::ErrorKind::NotFound,
            AppError::HttpError { .. } | AppError::CloudError { .. } => {
                io::ErrorKind::ConnectionRefused
            }
            AppError::GitError { .. }
            | AppError::CommandError { .. }
            | AppError::BrowserError(_)
            | AppError::PreferencesError(_)
            | AppError::DispatchError(_)
            | AppError::TomlSerializeError(_) => io::ErrorKind::Other,
        }
    }
}
