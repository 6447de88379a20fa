//! Command registry loaded from bundle manifests on disk.
//!
//! Layout: `<bundles_dir>/<dir>/bundle.toml`, where each manifest names the
//! bundle it contributes to and lists its commands. Several directories may
//! contribute to the same bundle; they take precedence in directory-name order.
//! A manifest that cannot be read or parsed is skipped with a warning.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::{BundleElement, BundleEntry, CommandElement, CommandRegistry};

pub const BUNDLE_MANIFEST: &str = "bundle.toml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BundleManifest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    commands: Vec<CommandManifest>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommandManifest {
    name: String,
    program: String,
    #[serde(default)]
    args: Vec<String>,
}

/// Registry reading bundle manifests from a directory on every lookup.
#[derive(Debug, Clone)]
pub struct FilesystemBundleRegistry {
    bundles_dir: PathBuf,
}

impl FilesystemBundleRegistry {
    pub fn new(bundles_dir: PathBuf) -> Self {
        Self { bundles_dir }
    }

    fn load_elements(&self) -> Result<Vec<BundleElement>, AppError> {
        if !self.bundles_dir.is_dir() {
            debug!(dir = %self.bundles_dir.display(), "bundles directory missing");
            return Ok(Vec::new());
        }

        let mut dirs: Vec<PathBuf> = fs::read_dir(&self.bundles_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.join(BUNDLE_MANIFEST).is_file())
            .collect();
        dirs.sort();

        Ok(dirs
            .iter()
            .filter_map(|dir| match load_element(dir) {
                Ok(element) => Some(element),
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "skipping bundle");
                    None
                }
            })
            .collect())
    }
}

fn load_element(dir: &Path) -> Result<BundleElement, AppError> {
    let dir_name = dir.file_name().and_then(|n| n.to_str()).unwrap_or("").to_string();
    let content = fs::read_to_string(dir.join(BUNDLE_MANIFEST))?;
    let manifest: BundleManifest = toml::from_str(&content)
        .map_err(|e| AppError::InvalidBundle { bundle: dir_name.clone(), reason: e.to_string() })?;

    let name = manifest.name.unwrap_or(dir_name);
    let commands = manifest
        .commands
        .into_iter()
        .map(|c| CommandElement { name: c.name, bundle: name.clone(), program: c.program, args: c.args })
        .collect();

    Ok(BundleElement { name, path: dir.to_path_buf(), commands })
}

impl CommandRegistry for FilesystemBundleRegistry {
    fn bundle_entry(&self, name: &str) -> Result<Option<BundleEntry>, AppError> {
        Ok(self.bundle_entries()?.into_iter().find(|entry| entry.name == name))
    }

    fn bundle_entries(&self) -> Result<Vec<BundleEntry>, AppError> {
        let mut entries: BTreeMap<String, Vec<BundleElement>> = BTreeMap::new();
        for element in self.load_elements()? {
            entries.entry(element.name.clone()).or_default().push(element);
        }
        Ok(entries
            .into_iter()
            .map(|(name, contributing_bundles)| BundleEntry { name, contributing_bundles })
            .collect())
    }
}
