/// launchdeck library
///
/// Core functionality for discovering, classifying, and launching local
/// software projects.

pub mod config;
pub mod core;
pub mod error;
pub mod launch;

// Re-exports for convenience
pub use config::Config;
pub use error::{LaunchdeckError, Result};
