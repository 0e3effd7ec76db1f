/// package.json parsing
///
/// Only the fields the launcher cares about: project name, homepage URL,
/// and the npm scripts table. Everything else in the manifest is ignored.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

fn default_name() -> String {
    "Unknown Project".to_string()
}

/// The slice of package.json relevant to launching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub homepage: Option<String>,

    // serde_json's preserve_order keeps scripts in file order, so the
    // first script listed is the one a bare `launch` picks
    #[serde(default)]
    pub scripts: Map<String, Value>,
}

impl PackageManifest {
    /// Read and parse `package.json` from a project directory
    ///
    /// Unlike the discovery core this surfaces failures: a project that
    /// claims to be Node but ships a broken manifest is worth telling the
    /// user about, not silently defaulting.
    pub fn read<P: AsRef<Path>>(project_path: P) -> Result<Self> {
        let manifest_path = project_path.as_ref().join("package.json");
        let content = fs::read_to_string(manifest_path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// Script names in file order
    pub fn script_names(&self) -> Vec<&str> {
        self.scripts.keys().map(|k| k.as_str()).collect()
    }

    /// Look up a script's command line
    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).and_then(|v| v.as_str())
    }
}
