//! New command - Scaffolds a module and registers it in the index

use anyhow::{Context, Result};
use colored::*;

use crate::core::config::Manifest;
use crate::core::scaffold::{self, Outcome};
use crate::core::utils;

pub fn run(name: Option<&str>, verbose: bool) -> Result<()> {
    let Some(name) = name else {
        utils::warn("must provide a name for the module");
        return Ok(());
    };

    println!(
        "{}",
        format!("🗜️ Scaffolding module '{}'...", name).bright_yellow()
    );

    let root = std::env::current_dir().context("Failed to get current directory")?;
    let manifest = Manifest::load(&root)?;

    match scaffold::scaffold(&root, &manifest, name)? {
        Outcome::AlreadyExists { module_path } => {
            utils::warn(&format!(
                "file already exists: {}",
                utils::path(module_path.display())
            ));
        }
        Outcome::Created {
            module_path,
            index_path,
        } => {
            if verbose {
                utils::step(&format!("Wrote {}", utils::path(module_path.display())));
                utils::step(&format!(
                    "Registered in {}",
                    utils::path(index_path.display())
                ));
            }
            utils::success(&format!("Module '{}' scaffolded", name));
        }
    }

    Ok(())
}
