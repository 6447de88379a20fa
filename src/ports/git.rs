use std::path::{Path, PathBuf};

use crate::domain::{AppError, Project};

/// Port for binding projects to git repositories.
pub trait GitRepositoryManager: Send + Sync {
    /// Return the repository bound to `project`, initializing one when absent.
    ///
    /// Calling this again for the same project attaches to the existing
    /// repository instead of creating a second one.
    fn create_or_attach(&self, project: &Project) -> Result<Box<dyn GitRepository>, AppError>;
}

/// Index operations on a bound repository.
pub trait GitRepository {
    /// Working directory of the repository.
    fn workdir(&self) -> &Path;

    /// Re-read the index so filesystem changes since the last read are visible.
    fn refresh_index(&self) -> Result<(), AppError>;

    /// Paths (relative to the workdir) that differ from the index or HEAD.
    fn changed_files(&self) -> Result<Vec<PathBuf>, AppError>;

    /// Stage the given paths, recording deletions for paths no longer on disk.
    fn stage_files(&self, files: &[PathBuf]) -> Result<(), AppError>;

    /// Commit the staged tree. Returns the new commit id, or `None` when the
    /// staged tree matches HEAD.
    fn commit(&self, message: &str) -> Result<Option<String>, AppError>;
}
