/// Project searcher with fuzzy matching
///
/// Lets the user type a few characters and still hit the right card.
/// Matches against the directory name and the README title, whichever
/// scores higher.

use crate::core::discovery::ProjectEntry;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// A project entry with its match score
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub entry: ProjectEntry,
    pub score: i64,
}

/// Handles project searching with fuzzy matching
pub struct Searcher {
    matcher: SkimMatcherV2,
}

impl Searcher {
    /// Create a new searcher instance
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Search entries with fuzzy matching
    ///
    /// # Arguments
    /// * `entries` - Discovered projects to search
    /// * `query` - Search query
    ///
    /// # Returns
    /// Matching entries sorted by score, highest first. Non-matches are
    /// dropped entirely.
    pub fn search(&self, entries: Vec<ProjectEntry>, query: &str) -> Vec<SearchResult> {
        let mut results: Vec<SearchResult> = entries
            .into_iter()
            .filter_map(|entry| {
                let by_name = self.matcher.fuzzy_match(&entry.name, query);
                let by_title = self.matcher.fuzzy_match(&entry.summary.title, query);
                by_name
                    .into_iter()
                    .chain(by_title)
                    .max()
                    .map(|score| SearchResult { entry, score })
            })
            .collect();

        // Sort by score (highest first)
        results.sort_by(|a, b| b.score.cmp(&a.score));

        results
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Discovery;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> Vec<ProjectEntry> {
        let temp = TempDir::new().unwrap();
        for name in ["blog-engine", "billing-api", "dotfiles"] {
            let dir = temp.path().join(name);
            fs::create_dir(&dir).unwrap();
            fs::write(dir.join("package.json"), "{}").unwrap();
        }

        Discovery::discover_projects(temp.path()).unwrap()
    }

    #[test]
    fn test_fuzzy_search() {
        let searcher = Searcher::new();

        let results = searcher.search(setup(), "blog");
        assert!(!results.is_empty());
        assert_eq!(results[0].entry.name, "blog-engine");
    }

    #[test]
    fn test_abbreviated_query() {
        let searcher = Searcher::new();

        // "bapi" should still land on billing-api
        let results = searcher.search(setup(), "bapi");
        assert!(!results.is_empty());
        assert_eq!(results[0].entry.name, "billing-api");
    }

    #[test]
    fn test_no_match_is_empty() {
        let searcher = Searcher::new();

        let results = searcher.search(setup(), "zzzzzz");
        assert!(results.is_empty());
    }
}
