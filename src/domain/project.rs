//! Local project handle.

use std::fmt;
use std::path::{Path, PathBuf};

use super::AppError;

/// A user project selected before the wizard starts.
///
/// The project owns a repository binding and a preference scope, both keyed
/// by its canonical root directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Project {
    name: String,
    root: PathBuf,
}

impl Project {
    /// Resolve a project from a directory on disk.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        if !path.is_dir() {
            return Err(AppError::ProjectNotFound(path.display().to_string()));
        }
        let root = path.canonicalize()?;
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        Ok(Self { name, root })
    }

    /// Build a project handle without touching the filesystem.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), root: root.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Key under which per-project preferences are stored.
    pub fn preference_key(&self) -> String {
        self.root.to_string_lossy().into_owned()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.root.display())
    }
}
