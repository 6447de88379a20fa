//! Resolve and run the Heroku bundle command for a deploy request.

use std::path::Path;

use tracing::{info, warn};

use crate::domain::{AppError, DeployRequest, HerokuConfig};
use crate::ports::{CommandExecutor, CommandRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Executed { command: String },
    /// No bundle or no command with that name; nothing ran.
    Unresolved { bundle: String, command: String },
}

/// Must run on the UI thread: bundle commands are not thread-safe.
pub fn invoke_remote(
    registry: &dyn CommandRegistry,
    executor: &dyn CommandExecutor,
    heroku: &HerokuConfig,
    request: &DeployRequest,
    working_dir: Option<&Path>,
) -> Result<Invocation, AppError> {
    let command_name = heroku.command_name(request.publish_immediately);

    // TODO: surface a missing bundle command to the user instead of only logging it.
    let Some(command) = registry.resolve(&heroku.bundle, command_name)? else {
        warn!(bundle = %heroku.bundle, command = command_name, "bundle command not found, skipping");
        return Ok(Invocation::Unresolved {
            bundle: heroku.bundle.clone(),
            command: command_name.to_string(),
        });
    };

    let mut context = command.create_context();
    context.put(heroku.app_name_key.as_str(), request.app_name.as_str());
    if let Some(dir) = working_dir {
        context.set_working_dir(dir);
    }

    executor.execute(&command, &context)?;
    info!(command = %command.name, app = %request.app_name, "bundle command finished");
    Ok(Invocation::Executed { command: command.name })
}
