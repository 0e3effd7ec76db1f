/// Launch module
///
/// Handles working out how a project should be run (npm script or Python
/// entry file) and spawning it.

pub mod entry_point;
pub mod manifest;
pub mod plan;

pub use entry_point::find_python_entry;
pub use manifest::PackageManifest;
pub use plan::LaunchPlan;
