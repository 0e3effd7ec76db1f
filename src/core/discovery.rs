/// Project discovery
///
/// The orchestration layer: walks the immediate children of the projects
/// root, keeps the ones the validator accepts, and builds a listing entry
/// for each by running the classifier and the README extractor. One level
/// deep only; nested projects belong to their parent's card.

use crate::core::catalog::Classification;
use crate::core::readme::{ReadmeExtractor, Summary};
use crate::core::{Classifier, Validator};
use crate::error::{LaunchdeckError, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One listing entry per qualifying project directory
///
/// Immutable once built; a refresh rebuilds the whole listing rather than
/// patching entries in place.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectEntry {
    pub name: String,
    pub path: PathBuf,
    pub classification: Classification,
    pub summary: Summary,
}

/// Enumerates and builds project entries
pub struct Discovery;

impl Discovery {
    /// Discover all projects directly under a root directory
    ///
    /// Entries come back sorted by name so two passes over an unchanged
    /// tree produce identical listings (OS directory order is not stable).
    /// Per-project probe failures are absorbed into default values; the
    /// only surfaced error is a missing root, which is a precondition
    /// failure rather than a per-project one.
    ///
    /// # Examples
    /// ```no_run
    /// use launchdeck_lib::core::Discovery;
    ///
    /// # fn example() -> launchdeck_lib::Result<()> {
    /// let entries = Discovery::discover_projects("/home/user/code")?;
    /// for entry in &entries {
    ///     println!("{} {}", entry.classification, entry.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn discover_projects<P: AsRef<Path>>(root: P) -> Result<Vec<ProjectEntry>> {
        let root = root.as_ref();

        if !root.is_dir() {
            return Err(LaunchdeckError::RootNotFound(root.to_path_buf()));
        }

        let mut dirs: Vec<PathBuf> = fs::read_dir(root)?
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();

        let extractor = ReadmeExtractor::new();

        let entries = dirs
            .into_iter()
            .filter(|path| Validator::is_valid_project(path))
            .map(|path| Self::build_entry(path, &extractor))
            .collect();

        Ok(entries)
    }

    fn build_entry(path: PathBuf, extractor: &ReadmeExtractor) -> ProjectEntry {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
            .to_string();

        ProjectEntry {
            classification: Classifier::classify(&path),
            summary: extractor.extract(&path),
            name,
            path,
        }
    }

    /// Find a discovered project by its directory name
    pub fn find_project<P: AsRef<Path>>(root: P, name: &str) -> Result<ProjectEntry> {
        Self::discover_projects(root)?
            .into_iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| LaunchdeckError::ProjectNotFound(name.to_string()))
    }
}
