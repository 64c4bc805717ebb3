//! Configuration module - Workspace layout and manifest

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default workspace layout
pub mod defaults {
    /// Directory the generated modules live in
    pub const MODULES_DIR: &str = "src/modules";

    /// Index file aggregating the module re-exports
    pub const INDEX_FILE: &str = "index.ts";
}

/// Manifest file name, looked up in the workspace root
pub const MANIFEST_FILE: &str = "chisel.toml";

/// Workspace layout, optionally overridden by a `chisel.toml` manifest
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Modules directory, relative to the workspace root
    pub modules_dir: PathBuf,

    /// Index file name inside the modules directory
    pub index_file: String,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            modules_dir: PathBuf::from(defaults::MODULES_DIR),
            index_file: defaults::INDEX_FILE.to_string(),
        }
    }
}

impl Manifest {
    /// Load the manifest from the workspace root, falling back to the
    /// default layout when no manifest file is present
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .context(format!("Failed to read manifest: {}", path.display()))?;
        toml::from_str(&content).context(format!("Failed to parse manifest: {}", path.display()))
    }

    /// Directory holding the module files
    pub fn modules_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.modules_dir)
    }

    /// Path of the shared index file
    pub fn index_path(&self, root: &Path) -> PathBuf {
        self.modules_dir(root).join(&self.index_file)
    }

    /// Path of the module file for `name`. The name is joined verbatim,
    /// capitalization included.
    pub fn module_path(&self, root: &Path, name: &str) -> PathBuf {
        self.modules_dir(root).join(format!("{name}.ts"))
    }
}
