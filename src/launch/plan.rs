/// Launch planning
///
/// Figures out what command a project should be launched with, separately
/// from actually running it. Planning is pure filesystem probing and fully
/// testable; spawning is a thin wrapper at the end.

use crate::error::{LaunchdeckError, Result};
use crate::launch::entry_point::find_python_entry;
use crate::launch::manifest::PackageManifest;
use std::path::Path;
use std::process::Command;

/// How a project gets launched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    /// `npm run <script>` in the project directory
    NpmScript { script: String },
    /// `python <file>` in the project directory
    PythonEntry { file: String },
}

impl LaunchPlan {
    /// Decide how to launch a project
    ///
    /// A project with a package.json launches via npm: the requested script
    /// if given (it must be declared), otherwise the first script in the
    /// manifest. Anything else launches its Python entry file. A project
    /// with neither is not launchable.
    pub fn plan<P: AsRef<Path>>(project_path: P, script: Option<&str>) -> Result<Self> {
        let project_path = project_path.as_ref();

        if project_path.join("package.json").exists() {
            let manifest = PackageManifest::read(project_path)?;

            let script = match script {
                Some(name) => {
                    if manifest.script(name).is_none() {
                        return Err(LaunchdeckError::ScriptNotFound(name.to_string()));
                    }
                    name.to_string()
                }
                None => match manifest.script_names().first() {
                    Some(first) => first.to_string(),
                    None => {
                        return Err(LaunchdeckError::NotLaunchable(project_path.to_path_buf()))
                    }
                },
            };

            return Ok(LaunchPlan::NpmScript { script });
        }

        match find_python_entry(project_path) {
            Some(file) => Ok(LaunchPlan::PythonEntry { file }),
            None => Err(LaunchdeckError::NotLaunchable(project_path.to_path_buf())),
        }
    }

    /// The program and arguments this plan runs
    pub fn command_line(&self) -> (&str, Vec<&str>) {
        match self {
            LaunchPlan::NpmScript { script } => ("npm", vec!["run", script.as_str()]),
            LaunchPlan::PythonEntry { file } => ("python", vec![file.as_str()]),
        }
    }

    /// Spawn the planned command in the project directory
    ///
    /// Fire and forget: the child is detached, launchdeck does not wait on
    /// it or collect its exit status.
    pub fn spawn<P: AsRef<Path>>(&self, project_path: P) -> Result<()> {
        let (program, args) = self.command_line();

        Command::new(program)
            .args(&args)
            .current_dir(project_path.as_ref())
            .spawn()?;

        Ok(())
    }
}

impl std::fmt::Display for LaunchPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (program, args) = self.command_line();
        write!(f, "{} {}", program, args.join(" "))
    }
}
