//! Red Hat cloud provider driven through its command line client.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use crate::domain::{AppError, AuthStatus, RedHatConfig, RedHatDeployRequest};
use crate::ports::{AppProvisioner, Authenticator};

const PROVIDER: &str = "Red Hat";

#[derive(Debug, Clone)]
pub struct RedHatCli {
    program: String,
    leading_args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl RedHatCli {
    pub fn new(config: &RedHatConfig) -> Self {
        Self { program: config.program.clone(), leading_args: config.args.clone(), cwd: None }
    }

    pub fn with_cwd(mut self, cwd: PathBuf) -> Self {
        self.cwd = Some(cwd);
        self
    }

    fn run(&self, args: &[&str]) -> Result<Result<String, String>, AppError> {
        let mut command = Command::new(&self.program);
        command.args(&self.leading_args).args(args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        debug!(program = %self.program, ?args, "running red hat client");

        let output = command.output().map_err(|e| AppError::CloudError {
            provider: PROVIDER.to_string(),
            message: format!("failed to run '{}': {}", self.program, e),
        })?;

        if output.status.success() {
            Ok(Ok(String::from_utf8_lossy(&output.stdout).trim().to_string()))
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Ok(Err(if stderr.is_empty() { "Unknown error".to_string() } else { stderr }))
        }
    }
}

impl Authenticator for RedHatCli {
    fn provider_name(&self) -> &str {
        PROVIDER
    }

    fn authenticate(&self) -> Result<AuthStatus, AppError> {
        Ok(match self.run(&["account"])? {
            Ok(_) => AuthStatus::Authenticated,
            Err(reason) => AuthStatus::Unauthenticated { reason },
        })
    }
}

impl AppProvisioner for RedHatCli {
    fn create_app(&self, request: &RedHatDeployRequest) -> Result<(), AppError> {
        let destination = request.destination.to_string_lossy();
        let args = [
            "app",
            "create",
            "-a",
            request.app_name.as_str(),
            "-t",
            request.app_type.as_str(),
            "-r",
            destination.as_ref(),
        ];
        match self.run(&args)? {
            Ok(_) => {
                info!(app = %request.app_name, "created Red Hat application");
                Ok(())
            }
            Err(message) => Err(AppError::CloudError { provider: PROVIDER.to_string(), message }),
        }
    }
}
