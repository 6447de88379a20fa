//! git2-backed repository manager.

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository, Signature, Status, StatusOptions};
use tracing::{debug, info};

use crate::domain::{AppError, GitConfig, Project};
use crate::ports::{GitRepository, GitRepositoryManager};

/// Binds projects to the repository that contains them, initializing one at
/// the project root when none exists.
#[derive(Debug, Clone)]
pub struct Git2RepositoryManager {
    author_name: String,
    author_email: String,
}

impl Git2RepositoryManager {
    pub fn new(config: &GitConfig) -> Self {
        Self { author_name: config.author_name.clone(), author_email: config.author_email.clone() }
    }
}

impl GitRepositoryManager for Git2RepositoryManager {
    fn create_or_attach(&self, project: &Project) -> Result<Box<dyn GitRepository>, AppError> {
        let root = project.root();
        let repo = match Repository::discover(root) {
            Ok(repo) => {
                debug!(project = %project.name(), "attached to existing git repository");
                repo
            }
            Err(e) if e.code() == ErrorCode::NotFound => {
                info!(project = %project.name(), path = %root.display(), "initializing git repository");
                Repository::init(root).map_err(|e| AppError::git("git2::Repository::init", e))?
            }
            Err(e) => return Err(AppError::git("git2::Repository::discover", e)),
        };

        let workdir = repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| AppError::git("git2::Repository::workdir", "repository is bare"))?;

        Ok(Box::new(Git2Repository {
            repo,
            workdir,
            author_name: self.author_name.clone(),
            author_email: self.author_email.clone(),
        }))
    }
}

pub struct Git2Repository {
    repo: Repository,
    workdir: PathBuf,
    author_name: String,
    author_email: String,
}

impl Git2Repository {
    fn signature(&self) -> Result<Signature<'static>, AppError> {
        match self.repo.signature() {
            Ok(sig) => Ok(sig),
            Err(_) => Signature::now(&self.author_name, &self.author_email)
                .map_err(|e| AppError::git("git2::Signature::now", e)),
        }
    }
}

impl GitRepository for Git2Repository {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn refresh_index(&self) -> Result<(), AppError> {
        let mut index = self.repo.index().map_err(|e| AppError::git("git2::Repository::index", e))?;
        index.read(true).map_err(|e| AppError::git("git2::Index::read", e))
    }

    fn changed_files(&self) -> Result<Vec<PathBuf>, AppError> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true).recurse_untracked_dirs(true).include_ignored(false);

        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(|e| AppError::git("git2::Repository::statuses", e))?;

        Ok(statuses
            .iter()
            .filter(|entry| {
                let status = entry.status();
                status != Status::CURRENT && !status.is_ignored()
            })
            .filter_map(|entry| entry.path().map(PathBuf::from))
            .collect())
    }

    fn stage_files(&self, files: &[PathBuf]) -> Result<(), AppError> {
        let mut index = self.repo.index().map_err(|e| AppError::git("git2::Repository::index", e))?;

        for path in files {
            let absolute = self.workdir.join(path);
            if absolute.is_dir() {
                // Nested repositories show up as directories.
                debug!(path = %path.display(), "skipping directory entry");
                continue;
            }
            if absolute.exists() {
                index.add_path(path).map_err(|e| AppError::git("git2::Index::add_path", e))?;
            } else {
                index.remove_path(path).map_err(|e| AppError::git("git2::Index::remove_path", e))?;
            }
        }

        index.write().map_err(|e| AppError::git("git2::Index::write", e))
    }

    fn commit(&self, message: &str) -> Result<Option<String>, AppError> {
        let mut index = self.repo.index().map_err(|e| AppError::git("git2::Repository::index", e))?;
        let tree_id = index.write_tree().map_err(|e| AppError::git("git2::Index::write_tree", e))?;
        let tree =
            self.repo.find_tree(tree_id).map_err(|e| AppError::git("git2::Repository::find_tree", e))?;

        let parent = match self.repo.head() {
            Ok(head) => Some(
                head.peel_to_commit().map_err(|e| AppError::git("git2::Reference::peel_to_commit", e))?,
            ),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => None,
            Err(e) => return Err(AppError::git("git2::Repository::head", e)),
        };

        let unchanged = match &parent {
            Some(parent) => parent.tree_id() == tree_id,
            None => tree.is_empty(),
        };
        if unchanged {
            debug!("nothing staged, skipping commit");
            return Ok(None);
        }

        let signature = self.signature()?;
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        let oid = self
            .repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .map_err(|e| AppError::git("git2::Repository::commit", e))?;

        info!(commit = %oid, "created commit");
        Ok(Some(oid.to_string()))
    }
}
