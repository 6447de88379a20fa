//! Named bundle commands resolved at invocation time.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// A runnable command contributed by a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandElement {
    pub name: String,
    pub bundle: String,
    pub program: String,
    pub args: Vec<String>,
}

impl CommandElement {
    /// Create an empty execution context for this command.
    pub fn create_context(&self) -> CommandContext {
        CommandContext::default()
    }
}

/// Named string parameters handed to a command execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandContext {
    values: BTreeMap<String, String>,
    working_dir: Option<PathBuf>,
}

impl CommandContext {
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set_working_dir(&mut self, dir: impl Into<PathBuf>) {
        self.working_dir = Some(dir.into());
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}

/// One on-disk bundle contributing commands to a bundle entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleElement {
    pub name: String,
    pub path: PathBuf,
    pub commands: Vec<CommandElement>,
}

impl BundleElement {
    pub fn command_by_name(&self, name: &str) -> Option<&CommandElement> {
        self.commands.iter().find(|c| c.name == name)
    }
}

/// All bundles contributing under one bundle name, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub name: String,
    pub contributing_bundles: Vec<BundleElement>,
}

/// Port for looking up bundle commands by name.
pub trait CommandRegistry: Send + Sync {
    /// Find the entry for a bundle name.
    fn bundle_entry(&self, name: &str) -> Result<Option<BundleEntry>, AppError>;

    /// List every known bundle entry.
    fn bundle_entries(&self) -> Result<Vec<BundleEntry>, AppError>;

    /// Resolve a command within a bundle: the first contributing bundle that
    /// declares `command` wins.
    fn resolve(&self, bundle: &str, command: &str) -> Result<Option<CommandElement>, AppError> {
        let Some(entry) = self.bundle_entry(bundle)? else {
            return Ok(None);
        };
        Ok(entry
            .contributing_bundles
            .iter()
            .find_map(|element| element.command_by_name(command))
            .cloned())
    }
}

/// Port for running a resolved command.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, command: &CommandElement, context: &CommandContext) -> Result<(), AppError>;
}
