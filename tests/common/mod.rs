//! Shared testing utilities for deploy-wizard CLI tests.

use assert_cmd::Command;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated `$HOME` plus a project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
    original_home: Option<OsString>,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("work").join("shop");
        fs::create_dir_all(&project_dir).expect("Failed to create test project directory");

        let original_home = env::var_os("HOME");
        unsafe {
            env::set_var("HOME", root.path());
        }

        Self { root, project_dir, original_home }
    }

    pub fn home(&self) -> &Path {
        self.root.path()
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home().join(".config").join("deploy-wizard")
    }

    /// Build a command for the compiled binary running inside the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("deploy-wizard").expect("Failed to locate binary");
        cmd.current_dir(&self.project_dir).env("HOME", self.home()).env_remove("RUST_LOG");
        cmd
    }

    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.config_dir()).unwrap();
        fs::write(self.config_dir().join("config.toml"), content).unwrap();
    }

    pub fn write_preferences(&self, content: &str) {
        fs::create_dir_all(self.config_dir()).unwrap();
        fs::write(self.config_dir().join("preferences.toml"), content).unwrap();
    }

    /// Write `<bundles>/<dir>/bundle.toml`.
    pub fn write_bundle(&self, dir: &str, manifest: &str) {
        let bundle_dir = self.config_dir().join("bundles").join(dir);
        fs::create_dir_all(&bundle_dir).unwrap();
        fs::write(bundle_dir.join("bundle.toml"), manifest).unwrap();
    }

    /// Canonical project root, as stored in preferences.
    pub fn project_key(&self) -> String {
        fs::canonicalize(&self.project_dir).unwrap().display().to_string()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        match &self.original_home {
            Some(value) => unsafe {
                env::set_var("HOME", value);
            },
            None => unsafe {
                env::remove_var("HOME");
            },
        }
    }
}
