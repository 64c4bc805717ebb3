//! Scaffold module - Module file creation and index registration
//!
//! Both writes of a run are laid out as a plan before anything touches
//! disk, and the module file is rolled back if the index append fails.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::config::Manifest;
use crate::core::template::ModuleTemplate;

/// Result of a scaffold attempt
#[derive(Debug)]
pub enum Outcome {
    /// Module file written and index entry appended
    Created {
        module_path: PathBuf,
        index_path: PathBuf,
    },

    /// Destination already present, nothing touched
    AlreadyExists { module_path: PathBuf },
}

/// The two writes of a scaffold run, computed up front
#[derive(Debug)]
struct Plan {
    module_path: PathBuf,
    module_body: String,
    index_path: PathBuf,
    index_line: String,
}

impl Plan {
    fn prepare(root: &Path, manifest: &Manifest, name: &str) -> Self {
        let template = ModuleTemplate::new(name);

        Self {
            module_path: manifest.module_path(root, name),
            module_body: template.class_body(),
            index_path: manifest.index_path(root),
            index_line: template.index_export(),
        }
    }

    /// Commit both writes in order. A failed index append removes the
    /// fresh module file again so the two artifacts never disagree.
    fn commit(&self) -> Result<()> {
        std::fs::write(&self.module_path, &self.module_body).context(format!(
            "Failed to write module file: {}",
            self.module_path.display()
        ))?;

        if let Err(err) = append_line(&self.index_path, &self.index_line) {
            let _ = std::fs::remove_file(&self.module_path);
            return Err(err);
        }

        Ok(())
    }
}

/// Scaffold the module `name` under the workspace `root`.
///
/// The existence check is the only defensive branch: concurrent
/// invocations are not guarded against.
pub fn scaffold(root: &Path, manifest: &Manifest, name: &str) -> Result<Outcome> {
    let plan = Plan::prepare(root, manifest, name);

    if plan.module_path.exists() {
        return Ok(Outcome::AlreadyExists {
            module_path: plan.module_path,
        });
    }

    plan.commit()?;

    Ok(Outcome::Created {
        module_path: plan.module_path,
        index_path: plan.index_path,
    })
}

/// Append one line to `path`, creating the file when missing.
/// Append mode only, existing content is never truncated.
fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut index = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .context(format!("Failed to open index file: {}", path.display()))?;

    index
        .write_all(line.as_bytes())
        .context(format!("Failed to append to index file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    const FOO_BODY: &str = "import { Module } from \"./Module\";\n\nexport class Foo extends Module {\n}\n";
    const FOO_EXPORT: &str = "export { Foo } from \"./Foo\"\n";

    /// Workspace with an empty modules directory holding only the index file
    fn workspace() -> (TempDir, Manifest) {
        let dir = tempdir().unwrap();
        let manifest = Manifest::default();

        let modules = manifest.modules_dir(dir.path());
        std::fs::create_dir_all(&modules).unwrap();
        std::fs::write(manifest.index_path(dir.path()), "").unwrap();

        (dir, manifest)
    }

    #[test]
    fn creates_module_and_registers_it() {
        let (dir, manifest) = workspace();

        let outcome = scaffold(dir.path(), &manifest, "Foo").unwrap();
        assert!(matches!(outcome, Outcome::Created { .. }));

        let body = std::fs::read_to_string(manifest.module_path(dir.path(), "Foo")).unwrap();
        assert_eq!(body, FOO_BODY);

        let index = std::fs::read_to_string(manifest.index_path(dir.path())).unwrap();
        assert_eq!(index, FOO_EXPORT);
    }

    #[test]
    fn append_preserves_existing_index_content() {
        let (dir, manifest) = workspace();
        let index_path = manifest.index_path(dir.path());
        std::fs::write(&index_path, "export { Bar } from \"./Bar\"\n").unwrap();

        scaffold(dir.path(), &manifest, "Foo").unwrap();

        let index = std::fs::read_to_string(&index_path).unwrap();
        assert_eq!(index, format!("export {{ Bar }} from \"./Bar\"\n{FOO_EXPORT}"));
        assert!(index.ends_with(FOO_EXPORT));
    }

    #[test]
    fn second_run_reports_existing_and_changes_nothing() {
        let (dir, manifest) = workspace();

        scaffold(dir.path(), &manifest, "Foo").unwrap();
        let outcome = scaffold(dir.path(), &manifest, "Foo").unwrap();

        match outcome {
            Outcome::AlreadyExists { module_path } => {
                assert_eq!(module_path, manifest.module_path(dir.path(), "Foo"));
            }
            other => panic!("expected AlreadyExists, got {other:?}"),
        }

        // Neither artifact moved past the state of the first run
        let body = std::fs::read_to_string(manifest.module_path(dir.path(), "Foo")).unwrap();
        assert_eq!(body, FOO_BODY);
        let index = std::fs::read_to_string(manifest.index_path(dir.path())).unwrap();
        assert_eq!(index, FOO_EXPORT);
    }

    #[test]
    fn duplicate_index_lines_are_not_filtered() {
        let (dir, manifest) = workspace();
        let index_path = manifest.index_path(dir.path());

        // Index entry left behind by a since-deleted module file
        std::fs::write(&index_path, FOO_EXPORT).unwrap();

        scaffold(dir.path(), &manifest, "Foo").unwrap();

        let index = std::fs::read_to_string(&index_path).unwrap();
        assert_eq!(index, format!("{FOO_EXPORT}{FOO_EXPORT}"));
    }

    #[test]
    fn missing_index_is_created_by_the_append() {
        let (dir, manifest) = workspace();
        std::fs::remove_file(manifest.index_path(dir.path())).unwrap();

        scaffold(dir.path(), &manifest, "Foo").unwrap();

        let index = std::fs::read_to_string(manifest.index_path(dir.path())).unwrap();
        assert_eq!(index, FOO_EXPORT);
    }

    #[test]
    fn failed_append_rolls_back_the_module_file() {
        let (dir, manifest) = workspace();
        let index_path = manifest.index_path(dir.path());

        // A directory at the index path makes the append unopenable
        std::fs::remove_file(&index_path).unwrap();
        std::fs::create_dir(&index_path).unwrap();

        let result = scaffold(dir.path(), &manifest, "Foo");
        assert!(result.is_err());
        assert!(!manifest.module_path(dir.path(), "Foo").exists());
    }

    #[test]
    fn missing_modules_dir_propagates_without_creating_anything() {
        let dir = tempdir().unwrap();
        let manifest = Manifest::default();

        let result = scaffold(dir.path(), &manifest, "Foo");
        assert!(result.is_err());
        assert!(!manifest.module_path(dir.path(), "Foo").exists());
        assert!(!manifest.index_path(dir.path()).exists());
    }
}
