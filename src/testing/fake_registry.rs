use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;

use crate::domain::AppError;
use crate::ports::{
    BundleElement, BundleEntry, CommandContext, CommandElement, CommandExecutor, CommandRegistry,
};

/// Registry built in memory; each `with_*` call appends a contributing bundle
/// or a command to the last contributor.
#[derive(Default)]
pub struct FakeRegistry {
    entries: Mutex<Vec<BundleEntry>>,
}

fn command(bundle: &str, name: &str) -> CommandElement {
    CommandElement {
        name: name.to_string(),
        bundle: bundle.to_string(),
        program: "true".to_string(),
        args: Vec::new(),
    }
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` to the first contributor of `bundle`, creating it if needed.
    pub fn with_command(self, bundle: &str, name: &str) -> Self {
        self.add_command(bundle, name);
        self
    }

    /// Add a further contributing bundle declaring `names`.
    pub fn with_contributor(self, bundle: &str, names: &[&str]) -> Self {
        let element = BundleElement {
            name: bundle.to_string(),
            path: PathBuf::from(format!("/bundles/{}-{}", bundle, names.len())),
            commands: names.iter().map(|n| command(bundle, n)).collect(),
        };
        let mut entries = self.entries.lock().unwrap();
        match entries.iter_mut().find(|e| e.name == bundle) {
            Some(entry) => entry.contributing_bundles.push(element),
            None => entries.push(BundleEntry {
                name: bundle.to_string(),
                contributing_bundles: vec![element],
            }),
        }
        drop(entries);
        self
    }

    pub fn add_command(&self, bundle: &str, name: &str) {
        let mut entries = self.entries.lock().unwrap();
        let index = match entries.iter().position(|e| e.name == bundle) {
            Some(index) => index,
            None => {
                entries.push(BundleEntry { name: bundle.to_string(), contributing_bundles: Vec::new() });
                entries.len() - 1
            }
        };
        let entry = &mut entries[index];
        if entry.contributing_bundles.is_empty() {
            entry.contributing_bundles.push(BundleElement {
                name: bundle.to_string(),
                path: PathBuf::from(format!("/bundles/{}", bundle)),
                commands: Vec::new(),
            });
        }
        entry.contributing_bundles[0].commands.push(command(bundle, name));
    }
}

impl CommandRegistry for FakeRegistry {
    fn bundle_entry(&self, name: &str) -> Result<Option<BundleEntry>, AppError> {
        Ok(self.entries.lock().unwrap().iter().find(|e| e.name == name).cloned())
    }

    fn bundle_entries(&self) -> Result<Vec<BundleEntry>, AppError> {
        Ok(self.entries.lock().unwrap().clone())
    }
}

#[derive(Debug, Clone)]
pub struct ExecutedCommand {
    pub command: CommandElement,
    pub context: CommandContext,
    pub thread: Option<String>,
}

/// Executor that records each run instead of spawning a process.
#[derive(Default)]
pub struct RecordingExecutor {
    runs: Mutex<Vec<ExecutedCommand>>,
    fail: bool,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { runs: Mutex::new(Vec::new()), fail: true }
    }

    pub fn runs(&self) -> Vec<ExecutedCommand> {
        self.runs.lock().unwrap().clone()
    }

    pub fn command_names(&self) -> Vec<String> {
        self.runs().into_iter().map(|r| r.command.name).collect()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, command: &CommandElement, context: &CommandContext) -> Result<(), AppError> {
        self.runs.lock().unwrap().push(ExecutedCommand {
            command: command.clone(),
            context: context.clone(),
            thread: thread::current().name().map(str::to_string),
        });
        if self.fail {
            return Err(AppError::CommandError {
                command: command.name.clone(),
                details: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}
