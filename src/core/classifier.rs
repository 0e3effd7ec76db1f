/// Project classification logic
///
/// Walks the signature catalog against a directory and returns the best
/// matching technology. Total by contract: every probe failure (missing
/// dir, permission error, unreadable listing) reads as "marker absent" and
/// the worst case is the default classification, never an error.

use crate::core::catalog::{
    Classification, DEFAULT_CLASSIFICATION, SIGNATURE_RULES, WEB_CLASSIFICATION, WEB_EXTENSIONS,
};
use std::fs;
use std::path::Path;

/// Handles technology detection for a single directory
pub struct Classifier;

impl Classifier {
    /// Classify a project directory
    ///
    /// Catalog rules are tried in order, first marker hit wins; a hit with
    /// refinements checks the nested framework markers before settling on
    /// the rule's fallback. If no rule matches, a directory holding any
    /// loose web file classifies as Web, else as the generic default.
    ///
    /// # Examples
    /// ```no_run
    /// use launchdeck_lib::core::Classifier;
    ///
    /// let class = Classifier::classify("/home/user/code/my-app");
    /// println!("{} {}", class.icon, class.label);
    /// ```
    pub fn classify<P: AsRef<Path>>(path: P) -> Classification {
        let path = path.as_ref();

        for rule in SIGNATURE_RULES {
            if !path.join(rule.marker).exists() {
                continue;
            }
            for (sub_marker, refined) in rule.refinements {
                if path.join(sub_marker).exists() {
                    return *refined;
                }
            }
            return rule.classification;
        }

        if Self::has_web_files(path) {
            return WEB_CLASSIFICATION;
        }

        DEFAULT_CLASSIFICATION
    }

    // Any file in the immediate listing with a web extension counts.
    // Unreadable listing counts as no web files.
    fn has_web_files(path: &Path) -> bool {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(_) => return false,
        };

        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if WEB_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), "").unwrap();
    }

    #[test]
    fn test_plain_node_project() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "package.json");

        let class = Classifier::classify(temp.path());
        assert_eq!(class.label, "Node.js");
    }

    #[test]
    fn test_framework_beats_runtime() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "package.json");
        touch(&temp, "next.config.js");

        let class = Classifier::classify(temp.path());
        assert_eq!(class.label, "Next.js");
    }

    #[test]
    fn test_django_beats_plain_python() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "requirements.txt");
        touch(&temp, "manage.py");

        assert_eq!(Classifier::classify(temp.path()).label, "Django");
    }

    #[test]
    fn test_rule_order_node_before_python() {
        // Both markers present: package.json sits earlier in the catalog
        let temp = TempDir::new().unwrap();
        touch(&temp, "package.json");
        touch(&temp, "requirements.txt");

        assert_eq!(Classifier::classify(temp.path()).label, "Node.js");
    }

    #[test]
    fn test_single_marker_rules() {
        for (marker, label) in [
            ("Cargo.toml", "Rust"),
            ("go.mod", "Go"),
            ("Gemfile", "Ruby"),
            ("Dockerfile", "Docker"),
            ("mix.exs", "Elixir"),
        ] {
            let temp = TempDir::new().unwrap();
            touch(&temp, marker);
            assert_eq!(Classifier::classify(temp.path()).label, label);
        }
    }

    #[test]
    fn test_loose_web_files() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "index.html");
        touch(&temp, "style.css");

        assert_eq!(Classifier::classify(temp.path()).label, "Web");
    }

    #[test]
    fn test_empty_dir_is_default() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Classifier::classify(temp.path()), super::DEFAULT_CLASSIFICATION);
    }

    #[test]
    fn test_missing_dir_is_default() {
        // Total function: nonexistent path falls through to the default
        let class = Classifier::classify("/definitely/not/a/real/path");
        assert_eq!(class, super::DEFAULT_CLASSIFICATION);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "Cargo.toml");

        let first = Classifier::classify(temp.path());
        let second = Classifier::classify(temp.path());
        assert_eq!(first, second);
    }
}
