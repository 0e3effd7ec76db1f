/// Signature catalog
///
/// The static rule table that classification runs on. Order matters: the
/// classifier walks the slice top to bottom and stops at the first marker
/// hit, so putting `package.json` before `Cargo.toml` is a decision, not an
/// accident. Refinements are framework markers nested inside a runtime
/// marker and are checked in their own fixed order before the rule's
/// fallback applies (a dir with both package.json and next.config.js is
/// Next.js, never plain Node.js).

use serde::Serialize;

/// The (icon, label) pair describing a project's detected technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub icon: &'static str,
    pub label: &'static str,
}

impl Classification {
    pub const fn new(icon: &'static str, label: &'static str) -> Self {
        Self { icon, label }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon, self.label)
    }
}

/// What we say when nothing else matched
pub const DEFAULT_CLASSIFICATION: Classification = Classification::new("📁", "Project");

/// Classification for directories that only contain loose web files
pub const WEB_CLASSIFICATION: Classification = Classification::new("🌐", "Web");

/// One ordered rule: a marker file, the classification it implies, and the
/// nested framework markers that refine it
pub struct SignatureRule {
    pub marker: &'static str,
    pub classification: Classification,
    pub refinements: &'static [(&'static str, Classification)],
}

/// The catalog itself. First match wins.
pub const SIGNATURE_RULES: &[SignatureRule] = &[
    SignatureRule {
        marker: "package.json",
        classification: Classification::new("📦", "Node.js"),
        refinements: &[
            ("next.config.js", Classification::new("⚛️", "Next.js")),
            ("angular.json", Classification::new("🅰️", "Angular")),
            ("vue.config.js", Classification::new("⚡", "Vue.js")),
            ("react-scripts", Classification::new("⚛️", "React")),
        ],
    },
    SignatureRule {
        marker: "requirements.txt",
        classification: Classification::new("🐍", "Python"),
        refinements: &[
            ("manage.py", Classification::new("🐍", "Django")),
            ("flask_app.py", Classification::new("🌶️", "Flask")),
        ],
    },
    SignatureRule {
        marker: "Cargo.toml",
        classification: Classification::new("🦀", "Rust"),
        refinements: &[],
    },
    SignatureRule {
        marker: "pom.xml",
        classification: Classification::new("☕", "Java"),
        refinements: &[],
    },
    SignatureRule {
        marker: "build.gradle",
        classification: Classification::new("☕", "Gradle"),
        refinements: &[],
    },
    SignatureRule {
        marker: "composer.json",
        classification: Classification::new("🐘", "PHP"),
        refinements: &[],
    },
    SignatureRule {
        marker: "Gemfile",
        classification: Classification::new("💎", "Ruby"),
        refinements: &[],
    },
    SignatureRule {
        marker: "go.mod",
        classification: Classification::new("🦫", "Go"),
        refinements: &[],
    },
    SignatureRule {
        marker: "pubspec.yaml",
        classification: Classification::new("🎯", "Flutter"),
        refinements: &[],
    },
    SignatureRule {
        marker: "CMakeLists.txt",
        classification: Classification::new("⚙️", "C/C++"),
        refinements: &[],
    },
    SignatureRule {
        marker: "mix.exs",
        classification: Classification::new("💧", "Elixir"),
        refinements: &[],
    },
    SignatureRule {
        marker: "project.clj",
        classification: Classification::new("🧪", "Clojure"),
        refinements: &[],
    },
    SignatureRule {
        marker: "build.sbt",
        classification: Classification::new("⚡", "Scala"),
        refinements: &[],
    },
    SignatureRule {
        marker: "Dockerfile",
        classification: Classification::new("🐳", "Docker"),
        refinements: &[],
    },
];

/// Extensions that mark a directory of loose files as a web project
pub const WEB_EXTENSIONS: &[&str] = &[".html", ".js", ".css", ".ts", ".jsx", ".tsx"];
