/// Error types for launchdeck
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.
///
/// The discovery core (classify / is_valid_project / extract_readme_info) is
/// deliberately total and never produces these: probe and parse failures
/// there collapse into documented defaults. Errors below cover the
/// precondition, config, and launch paths only.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for launchdeck operations
#[derive(Error, Debug)]
pub enum LaunchdeckError {
    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured projects root does not exist
    #[error("Projects directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// No discovered project matches the given name
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// The project has no recognized way to launch it
    #[error("No launchable entry point in: {}", .0.display())]
    NotLaunchable(PathBuf),

    /// The requested npm script is not declared in package.json
    #[error("Script '{0}' not found in package.json")]
    ScriptNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for launchdeck operations
pub type Result<T> = std::result::Result<T, LaunchdeckError>;

/// Convert LaunchdeckError to a user-friendly error message
impl LaunchdeckError {
    pub fn user_message(&self) -> String {
        match self {
            LaunchdeckError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            LaunchdeckError::RootNotFound(path) => {
                format!(
                    "Error: {} directory not found. Set it with: launchdeck set-root <path>",
                    path.display()
                )
            }
            LaunchdeckError::ProjectNotFound(name) => {
                format!("No project named '{}' under the projects directory", name)
            }
            LaunchdeckError::NotLaunchable(path) => {
                format!(
                    "Don't know how to launch {} (no package.json and no Python entry file)",
                    path.display()
                )
            }
            LaunchdeckError::ScriptNotFound(script) => {
                format!("package.json declares no script named '{}'", script)
            }
            LaunchdeckError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            LaunchdeckError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            LaunchdeckError::Generic(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = LaunchdeckError::ProjectNotFound("blog".to_string());
        assert!(err.user_message().contains("blog"));

        let err = LaunchdeckError::ScriptNotFound("dev".to_string());
        assert!(err.user_message().contains("dev"));
    }

    #[test]
    fn test_error_display() {
        let err = LaunchdeckError::RootNotFound(PathBuf::from("/nowhere"));
        let display = format!("{}", err);
        assert!(display.contains("/nowhere"));
    }
}
