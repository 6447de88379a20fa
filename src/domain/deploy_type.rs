use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Deploy target kind persisted in a project's preference scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeployType {
    Heroku,
    RedHat,
}

impl DeployType {
    pub const ALL: [DeployType; 2] = [DeployType::Heroku, DeployType::RedHat];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployType::Heroku => "HEROKU",
            DeployType::RedHat => "RED_HAT",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeployType::Heroku => "Heroku",
            DeployType::RedHat => "Red Hat",
        }
    }
}

impl fmt::Display for DeployType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeployType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeployType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::Validation(format!("Unknown deploy type '{}'", s)))
    }
}
