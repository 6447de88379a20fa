//! Pre-deploy git sequence: attach, refresh, stage everything, commit.

use tracing::{debug, info};

use crate::app::progress::WeightedProgress;
use crate::domain::progress::{ATTACH_REPOSITORY, COMMIT_CHANGES, REFRESH_INDEX};
use crate::domain::{AppError, Project};
use crate::ports::{GitRepository, GitRepositoryManager};

pub struct PreparedRepository {
    pub repository: Box<dyn GitRepository>,
    /// Commit created by the sequence, if anything was staged.
    pub commit: Option<String>,
}

/// Bring `project`'s repository to a committed state before any remote work.
///
/// Any failing step aborts the sequence. A repository that is already dirty
/// gets all of its changes folded into the automatic commit.
pub fn prepare_repository(
    git: &dyn GitRepositoryManager,
    project: &Project,
    commit_message: &str,
    progress: &mut WeightedProgress<'_>,
) -> Result<PreparedRepository, AppError> {
    let repository = progress.phase(ATTACH_REPOSITORY, || git.create_or_attach(project))?;
    progress.phase(REFRESH_INDEX, || repository.refresh_index())?;

    let commit = progress.phase(COMMIT_CHANGES, || {
        let changed = repository.changed_files()?;
        debug!(count = changed.len(), "staging changed files");
        repository.stage_files(&changed)?;
        repository.commit(commit_message)
    })?;

    match &commit {
        Some(id) => info!(project = %project.name(), commit = %id, "committed changes before deploy"),
        None => debug!(project = %project.name(), "working tree clean, no commit needed"),
    }
    Ok(PreparedRepository { repository, commit })
}
