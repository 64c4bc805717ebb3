//! Check command - Verifies modules and index agree

use anyhow::{Context, Result};
use colored::*;

use crate::core::config::Manifest;
use crate::core::registry::Registry;
use crate::core::utils;

pub fn run(verbose: bool) -> Result<()> {
    println!("{}", "🔍 Checking modules against the index...".bright_yellow());

    let root = std::env::current_dir().context("Failed to get current directory")?;
    let manifest = Manifest::load(&root)?;

    let modules_dir = manifest.modules_dir(&root);
    if !modules_dir.exists() {
        utils::warn(&format!(
            "Modules directory not found: {}. Run chisel from the workspace root.",
            modules_dir.display()
        ));
        return Ok(());
    }

    let registry = Registry::load(&root, &manifest)?;

    if verbose {
        utils::step(&format!(
            "{} module file(s), {} index entries",
            registry.on_disk.len(),
            registry.exported.len()
        ));
    }

    let drift = registry.drift();
    if drift.is_clean() {
        utils::success("Modules and index are in sync");
        return Ok(());
    }

    for name in &drift.unexported {
        utils::warn(&format!("{name} has no index entry"));
    }
    for name in &drift.dangling {
        utils::warn(&format!("{name} is exported but has no module file"));
    }
    for name in &drift.duplicated {
        utils::warn(&format!("{name} is exported more than once"));
    }

    Ok(())
}
