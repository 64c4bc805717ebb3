//! Registry module - Module discovery and index parsing

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::config::Manifest;

/// Snapshot of the workspace: module files on disk and index exports
#[derive(Debug)]
pub struct Registry {
    /// Module stems found in the modules directory, sorted
    pub on_disk: Vec<String>,

    /// Export names in index order, duplicates included
    pub exported: Vec<String>,
}

/// Disagreements between the modules directory and the index file
#[derive(Debug, Default)]
pub struct Drift {
    /// Module files with no index entry
    pub unexported: Vec<String>,

    /// Index entries with no module file behind them
    pub dangling: Vec<String>,

    /// Names exported more than once
    pub duplicated: Vec<String>,
}

impl Drift {
    pub fn is_clean(&self) -> bool {
        self.unexported.is_empty() && self.dangling.is_empty() && self.duplicated.is_empty()
    }
}

impl Registry {
    /// Read the modules directory and the index file under `root`
    pub fn load(root: &Path, manifest: &Manifest) -> Result<Self> {
        let dir = manifest.modules_dir(root);
        let entries = std::fs::read_dir(&dir)
            .context(format!("Failed to read modules directory: {}", dir.display()))?;

        let mut on_disk = Vec::new();
        for entry in entries {
            let entry =
                entry.context(format!("Failed to read modules directory: {}", dir.display()))?;
            let path = entry.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some("ts") {
                continue;
            }
            // The index file lives in the same directory but is not a module
            if entry.file_name().to_str() == Some(manifest.index_file.as_str()) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                on_disk.push(stem.to_string());
            }
        }
        on_disk.sort();

        let index_path = manifest.index_path(root);
        let exported = if index_path.exists() {
            let content = std::fs::read_to_string(&index_path)
                .context(format!("Failed to read index file: {}", index_path.display()))?;
            parse_exports(&content)
        } else {
            Vec::new()
        };

        Ok(Self { on_disk, exported })
    }

    pub fn is_exported(&self, name: &str) -> bool {
        self.exported.iter().any(|exported| exported == name)
    }

    /// Compare both sides and classify every disagreement
    pub fn drift(&self) -> Drift {
        let mut drift = Drift::default();

        for name in &self.on_disk {
            if !self.is_exported(name) {
                drift.unexported.push(name.clone());
            }
        }

        let mut seen: Vec<&str> = Vec::new();
        for name in &self.exported {
            if !self.on_disk.iter().any(|module| module == name) && !drift.dangling.contains(name)
            {
                drift.dangling.push(name.clone());
            }
            if seen.contains(&name.as_str()) {
                if !drift.duplicated.contains(name) {
                    drift.duplicated.push(name.clone());
                }
            } else {
                seen.push(name.as_str());
            }
        }

        drift
    }
}

/// Extract the export names from index file content, in file order
pub fn parse_exports(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(parse_export_line)
        .map(str::to_string)
        .collect()
}

/// Recognize one `export { Name } from "./Name"` line, tolerating a
/// trailing semicolon. Anything else is skipped.
fn parse_export_line(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix("export")?.trim_start();
    let rest = rest.strip_prefix('{')?;
    let (name, rest) = rest.split_once('}')?;

    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let target = rest.trim_start().strip_prefix("from")?.trim();
    let target = target.trim_end_matches(';').trim_end();
    let target = target.strip_prefix('"')?.strip_suffix('"')?;
    target.strip_prefix("./")?;

    Some(name)
}
