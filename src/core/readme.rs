/// README summary extraction
///
/// Finds a README in a project directory and pulls a title plus a short
/// plain-text description out of its markdown. Best effort all the way
/// down: no README, unreadable file, or markup that parses to nothing all
/// land on the documented defaults instead of an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Filename variants probed in order; the first one that exists wins and
/// later variants are ignored even if present
const README_VARIANTS: &[&str] = &["README.md", "README.txt", "README", "readme.md", "readme.txt"];

/// Default description when a README yields nothing usable
pub const NO_DESCRIPTION: &str = "No description available";

/// The (title, description) pair derived from a README
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub title: String,
    pub description: String,
}

impl Summary {
    /// The fallback summary: directory basename, no description
    pub fn default_for<P: AsRef<Path>>(path: P) -> Self {
        let title = path
            .as_ref()
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
            .to_string();

        Self {
            title,
            description: NO_DESCRIPTION.to_string(),
        }
    }
}

/// Parses READMEs into summaries
///
/// Compiles its regexes once at construction; reuse one instance across a
/// whole discovery pass rather than building one per directory.
pub struct ReadmeExtractor {
    title_re: Regex,
    heading_split_re: Regex,
    link_re: Regex,
    code_re: Regex,
    bold_re: Regex,
    italic_re: Regex,
    newline_re: Regex,
    sentence_end_re: Regex,
}

impl ReadmeExtractor {
    pub fn new() -> Self {
        // All patterns are literals, so compilation cannot fail at runtime
        Self {
            title_re: Regex::new(r"(?m)^#\s*(.+)$").expect("valid title pattern"),
            heading_split_re: Regex::new(r"(?m)^#.+\n+").expect("valid heading pattern"),
            link_re: Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid link pattern"),
            code_re: Regex::new(r"`([^`]+)`").expect("valid code pattern"),
            bold_re: Regex::new(r"\*\*([^*]+)\*\*").expect("valid bold pattern"),
            italic_re: Regex::new(r"\*([^*]+)\*").expect("valid italic pattern"),
            newline_re: Regex::new(r"\n+").expect("valid newline pattern"),
            sentence_end_re: Regex::new(r"[.!?]\s+").expect("valid sentence pattern"),
        }
    }

    /// Extract a summary from the README of a project directory
    ///
    /// Probes the filename variants in order and parses the first hit.
    /// Title falls back to the directory basename, description to
    /// "No description available".
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Summary {
        let path = path.as_ref();
        let mut summary = Summary::default_for(path);

        let Some(content) = self.read_readme(path) else {
            return summary;
        };

        if let Some(caps) = self.title_re.captures(&content) {
            if let Some(title) = caps.get(1) {
                summary.title = title.as_str().trim().to_string();
            }
        }

        if let Some(description) = self.first_paragraph_after_heading(&content) {
            let description = self.clean_markdown(&description);
            let description = self.truncate_sentences(&description);
            if !description.is_empty() {
                summary.description = description;
            }
        }

        summary
    }

    // First README variant that exists, read in full. A read failure on an
    // existing file counts as "no README".
    fn read_readme(&self, path: &Path) -> Option<String> {
        for variant in README_VARIANTS {
            let readme_path = path.join(variant);
            if readme_path.exists() {
                return fs::read_to_string(readme_path).ok();
            }
        }
        None
    }

    // Everything between the first heading line and the next blank line
    fn first_paragraph_after_heading(&self, content: &str) -> Option<String> {
        let after_heading = self.heading_split_re.splitn(content, 2).nth(1)?;
        let first_para = after_heading.split("\n\n").next().unwrap_or("");
        Some(first_para.trim().to_string())
    }

    // Substitution order matters: links before code spans before bold
    // before italic, then newlines collapse to spaces
    fn clean_markdown(&self, text: &str) -> String {
        let text = self.link_re.replace_all(text, "$1");
        let text = self.code_re.replace_all(&text, "$1");
        let text = self.bold_re.replace_all(&text, "$1");
        let text = self.italic_re.replace_all(&text, "$1");
        self.newline_re.replace_all(&text, " ").trim().to_string()
    }

    // Keep at most the first two sentences. A sentence ends at .!? followed
    // by whitespace; text with two or fewer passes through untouched.
    fn truncate_sentences(&self, text: &str) -> String {
        let mut sentences = Vec::new();
        let mut start = 0;

        for m in self.sentence_end_re.find_iter(text) {
            // The punctuation mark is a single byte, keep it on the sentence
            sentences.push(&text[start..m.start() + 1]);
            start = m.end();
        }
        if start < text.len() {
            sentences.push(&text[start..]);
        }

        if sentences.len() > 2 {
            sentences[..2].join(" ")
        } else {
            text.to_string()
        }
    }
}

impl Default for ReadmeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot convenience wrapper around [`ReadmeExtractor`]
pub fn extract_readme_info<P: AsRef<Path>>(path: P) -> Summary {
    ReadmeExtractor::new().extract(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project_with_readme(content: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), content).unwrap();
        temp
    }

    #[test]
    fn test_title_and_two_sentences() {
        let temp = project_with_readme(
            "# My Title\n\nFirst sentence. Second sentence. Third sentence.",
        );

        let summary = extract_readme_info(temp.path());
        assert_eq!(summary.title, "My Title");
        assert_eq!(summary.description, "First sentence. Second sentence.");
    }

    #[test]
    fn test_short_description_kept_verbatim() {
        let temp = project_with_readme("# App\n\nDoes one thing well.");

        let summary = extract_readme_info(temp.path());
        assert_eq!(summary.description, "Does one thing well.");
    }

    #[test]
    fn test_markdown_stripping() {
        let temp = project_with_readme(
            "# App\n\n[Link](http://x) `code` **bold** *italic*",
        );

        let summary = extract_readme_info(temp.path());
        assert_eq!(summary.description, "Link code bold italic");
    }

    #[test]
    fn test_paragraph_newlines_collapse() {
        let temp = project_with_readme("# App\n\nSpans\ntwo lines without a break.");

        let summary = extract_readme_info(temp.path());
        assert_eq!(summary.description, "Spans two lines without a break.");
    }

    #[test]
    fn test_heading_with_nothing_after() {
        let temp = project_with_readme("# Just a title\n\n");

        let summary = extract_readme_info(temp.path());
        assert_eq!(summary.title, "Just a title");
        assert_eq!(summary.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_no_readme_uses_basename() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("my-project");
        fs::create_dir(&project).unwrap();

        let summary = extract_readme_info(&project);
        assert_eq!(summary.title, "my-project");
        assert_eq!(summary.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_first_variant_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "# From markdown\n\nRight one.").unwrap();
        fs::write(temp.path().join("README.txt"), "# From text\n\nWrong one.").unwrap();

        let summary = extract_readme_info(temp.path());
        assert_eq!(summary.title, "From markdown");
    }

    #[test]
    fn test_lowercase_variant_found() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("readme.md"), "# lower\n\nStill parsed.").unwrap();

        let summary = extract_readme_info(temp.path());
        assert_eq!(summary.title, "lower");
    }

    #[test]
    fn test_no_heading_keeps_basename_title() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("headless");
        fs::create_dir(&project).unwrap();
        fs::write(project.join("README.md"), "Just prose, no heading.").unwrap();

        let summary = extract_readme_info(&project);
        assert_eq!(summary.title, "headless");
        assert_eq!(summary.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let temp = project_with_readme("# Same\n\nEvery time. Promise!");

        let extractor = ReadmeExtractor::new();
        assert_eq!(extractor.extract(temp.path()), extractor.extract(temp.path()));
    }
}
