use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Project};
use crate::ports::{GitRepository, GitRepositoryManager};

#[derive(Default)]
struct GitState {
    known_roots: HashSet<PathBuf>,
    changed: Vec<PathBuf>,
    staged: Vec<PathBuf>,
    events: Vec<String>,
    commits: Vec<String>,
    failing_step: Option<String>,
    panic_on_attach: bool,
    enclosing_workdir: Option<PathBuf>,
}

impl GitState {
    fn check(&self, step: &str) -> Result<(), AppError> {
        if self.failing_step.as_deref() == Some(step) {
            return Err(AppError::git(step, "simulated failure"));
        }
        Ok(())
    }
}

/// In-memory git manager recording every step as an event string.
#[derive(Clone, Default)]
pub struct FakeGit {
    state: Arc<Mutex<GitState>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_changed(self, files: &[&str]) -> Self {
        self.set_changed(files);
        self
    }

    pub fn failing_on(self, step: &str) -> Self {
        self.fail_on(step);
        self
    }

    pub fn fail_on(&self, step: &str) {
        self.state.lock().unwrap().failing_step = Some(step.to_string());
    }

    pub fn set_changed(&self, files: &[&str]) {
        self.state.lock().unwrap().changed = files.iter().map(PathBuf::from).collect();
    }

    pub fn panic_on_attach(&self) {
        self.state.lock().unwrap().panic_on_attach = true;
    }

    /// Attach every project to a repository rooted at `workdir`.
    pub fn attach_enclosing(&self, workdir: &str) {
        self.state.lock().unwrap().enclosing_workdir = Some(PathBuf::from(workdir));
    }

    pub fn events(&self) -> Vec<String> {
        self.state.lock().unwrap().events.clone()
    }

    pub fn commits(&self) -> Vec<String> {
        self.state.lock().unwrap().commits.clone()
    }

    pub fn repository_count(&self) -> usize {
        self.state.lock().unwrap().known_roots.len()
    }
}

impl GitRepositoryManager for FakeGit {
    fn create_or_attach(&self, project: &Project) -> Result<Box<dyn GitRepository>, AppError> {
        let mut state = self.state.lock().unwrap();
        if state.panic_on_attach {
            drop(state);
            panic!("git backend crashed");
        }
        let root = project.root().to_path_buf();
        if state.known_roots.contains(&root) {
            state.check("attach")?;
            state.events.push(format!("attach:{}", root.display()));
        } else {
            state.check("init")?;
            state.events.push(format!("init:{}", root.display()));
            state.known_roots.insert(root.clone());
        }
        let workdir = state.enclosing_workdir.clone().unwrap_or(root);
        Ok(Box::new(FakeRepository { workdir, state: Arc::clone(&self.state) }))
    }
}

struct FakeRepository {
    workdir: PathBuf,
    state: Arc<Mutex<GitState>>,
}

impl GitRepository for FakeRepository {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn refresh_index(&self) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.check("refresh")?;
        state.events.push("refresh".into());
        Ok(())
    }

    fn changed_files(&self) -> Result<Vec<PathBuf>, AppError> {
        let mut state = self.state.lock().unwrap();
        state.check("changed")?;
        state.events.push("changed".into());
        Ok(state.changed.clone())
    }

    fn stage_files(&self, files: &[PathBuf]) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.check("stage")?;
        let names: Vec<String> = files.iter().map(|f| f.display().to_string()).collect();
        state.events.push(format!("stage:{}", names.join(",")));
        state.staged.extend_from_slice(files);
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<Option<String>, AppError> {
        let mut state = self.state.lock().unwrap();
        state.check("commit")?;
        state.events.push(format!("commit:{}", message));
        if state.staged.is_empty() {
            return Ok(None);
        }
        state.staged.clear();
        state.changed.clear();
        state.commits.push(message.to_string());
        Ok(Some(format!("commit-{}", state.commits.len())))
    }
}
