//! Runs bundle commands as child processes.

use std::process::Command;

use tracing::{debug, info};

use crate::domain::AppError;
use crate::ports::{CommandContext, CommandElement, CommandExecutor};

/// Executes a command's program with context entries exported as environment
/// variables and `${KEY}` placeholders in arguments substituted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandExecutor;

impl ProcessCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

/// Substitute placeholders in one left-to-right pass. Unknown keys and
/// unterminated placeholders are kept as written.
fn expand(arg: &str, context: &CommandContext) -> String {
    let mut out = String::with_capacity(arg.len());
    let mut rest = arg;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        match context.get(&after[..end]) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 3]),
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}

impl CommandExecutor for ProcessCommandExecutor {
    fn execute(&self, command: &CommandElement, context: &CommandContext) -> Result<(), AppError> {
        let args: Vec<String> = command.args.iter().map(|a| expand(a, context)).collect();

        let mut process = Command::new(&command.program);
        process.args(&args).envs(context.values());
        if let Some(dir) = context.working_dir() {
            process.current_dir(dir);
        }

        info!(bundle = %command.bundle, command = %command.name, "running bundle command");
        debug!(program = %command.program, ?args, "spawning");

        let status = process.status().map_err(|e| AppError::CommandError {
            command: command.name.clone(),
            details: format!("failed to start '{}': {}", command.program, e),
        })?;

        if !status.success() {
            return Err(AppError::CommandError {
                command: command.name.clone(),
                details: match status.code() {
                    Some(code) => format!("exited with status {}", code),
                    None => "terminated by signal".to_string(),
                },
            });
        }
        Ok(())
    }
}
