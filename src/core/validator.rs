/// Project validation logic
///
/// Decides whether a directory deserves a card at all. Deliberately much
/// broader than the classifier: a directory can pass here on signals the
/// catalog knows nothing about (a lockfile, a stray .sh, a src/ folder) and
/// still end up with the generic classification. Total function, never
/// fails: probe errors just mean "signal absent".

use std::fs;
use std::path::Path;

/// Known config/manifest filenames across ecosystems
const CONFIG_FILES: &[&str] = &[
    "package.json",      // Node.js
    "requirements.txt",  // Python
    "setup.py",          // Python
    "pyproject.toml",    // Python (modern)
    "Cargo.toml",        // Rust
    "pom.xml",           // Java/Maven
    "build.gradle",      // Java/Gradle
    "composer.json",     // PHP
    "Gemfile",           // Ruby
    "go.mod",            // Go
    "tsconfig.json",     // TypeScript
    "angular.json",      // Angular
    "vue.config.js",     // Vue.js
    "next.config.js",    // Next.js
    "nuxt.config.js",    // Nuxt.js
    "webpack.config.js", // Webpack
    "vite.config.js",    // Vite
    "docker-compose.yml", // Docker
    "Dockerfile",        // Docker
    ".env",              // Environment config
    "config.json",       // Generic config
    "app.json",          // React Native
    "pubspec.yaml",      // Flutter
    "CMakeLists.txt",    // C/C++
    "Makefile",          // C/C++/Generic
    "mix.exs",           // Elixir
    "project.clj",       // Clojure
    "build.sbt",         // Scala
    "build.xml",         // Ant
    "bower.json",        // Bower
    "yarn.lock",         // Yarn
    "pnpm-lock.yaml",    // pnpm
    "package-lock.json", // npm
];

/// File extensions that read as source code or project assets
const SOURCE_EXTENSIONS: &[&str] = &[
    // Web
    ".html", ".htm", ".js", ".jsx", ".ts", ".tsx", ".css", ".scss", ".sass", ".less",
    // Python
    ".py", ".pyx", ".pyd", ".pyi",
    // Java
    ".java", ".class", ".jar",
    // C/C++
    ".c", ".cpp", ".h", ".hpp", ".cc", ".cxx",
    // Go
    ".go",
    // Rust
    ".rs",
    // PHP
    ".php",
    // Ruby
    ".rb",
    // Swift
    ".swift",
    // Kotlin
    ".kt", ".kts",
    // C#
    ".cs",
    // F#
    ".fs",
    // Scala
    ".scala",
    // Dart
    ".dart",
    // CoffeeScript
    ".coffee",
    // Lua
    ".lua",
    // Shell
    ".sh", ".bash", ".zsh",
    // PowerShell
    ".ps1",
    // Batch
    ".bat", ".cmd",
    // SQL
    ".sql",
    // Database
    ".db", ".sqlite", ".sqlite3",
    // Markup
    ".md", ".rst", ".txt",
    // Config
    ".json", ".yaml", ".yml", ".toml", ".ini", ".cfg", ".conf",
    // Other
    ".exe", ".dll", ".so", ".dylib",
];

/// Conventional project subdirectory names
const PROJECT_DIRS: &[&str] = &[
    "src", "source", "app", "lib", "libs", "bin", "dist", "build",
    "public", "static", "assets", "resources", "tests", "test",
    "docs", "examples", "samples", "scripts", "tools", "utils",
    "components", "pages", "views", "controllers", "models",
    "templates", "styles", "themes", "config", "conf", "settings",
    "migrations", "seeds", "fixtures", "data", "content",
];

/// Decides whether a directory is worth listing
pub struct Validator;

impl Validator {
    /// Check if the directory contains a valid application project
    ///
    /// True when any of three signals fires: a known config/manifest file,
    /// a file with a recognized source extension in the immediate listing,
    /// or a conventionally named subdirectory. The checks short-circuit in
    /// that order for cost, not correctness.
    pub fn is_valid_project<P: AsRef<Path>>(path: P) -> bool {
        let path = path.as_ref();

        if CONFIG_FILES.iter().any(|name| path.join(name).exists()) {
            return true;
        }

        if Self::has_source_files(path) {
            return true;
        }

        PROJECT_DIRS.iter().any(|name| path.join(name).is_dir())
    }

    fn has_source_files(path: &Path) -> bool {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(_) => return false,
        };

        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
                return true;
            }
        }

        false
    }
}
