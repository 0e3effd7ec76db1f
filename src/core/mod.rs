/// Core functionality modules
///
/// Contains the main business logic for project discovery, validation,
/// classification, README summaries, and search.

pub mod catalog;
pub mod classifier;
pub mod discovery;
pub mod readme;
pub mod searcher;
pub mod validator;

pub use catalog::{Classification, DEFAULT_CLASSIFICATION};
pub use classifier::Classifier;
pub use discovery::{Discovery, ProjectEntry};
pub use readme::{extract_readme_info, ReadmeExtractor, Summary};
pub use searcher::{SearchResult, Searcher};
pub use validator::Validator;
