//! List command - Shows modules and their index status

use anyhow::{Context, Result};
use colored::*;

use crate::core::config::Manifest;
use crate::core::registry::Registry;
use crate::core::utils;

pub fn run(_verbose: bool) -> Result<()> {
    println!("{}", "📦 Modules in the workspace:".bright_cyan());
    println!();

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

    if registry.on_disk.is_empty() {
        println!("  (no modules yet)");
    }
    for name in &registry.on_disk {
        if registry.is_exported(name) {
            println!("  {} {}", name.bright_green(), "exported".bright_black());
        } else {
            println!("  {} {}", name.bright_green(), "not in index".bright_yellow());
        }
    }

    println!();
    println!(
        "Use {} to scaffold another",
        "chisel new <name>".bright_yellow()
    );

    Ok(())
}
