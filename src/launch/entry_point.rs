/// Python entry file detection
///
/// Picks the file `python <file>` should run for a project that has no
/// package.json: the conventional names first, then any .py file at all.

use std::fs;
use std::path::Path;

/// Conventional Python entry points, checked in order
const COMMON_ENTRY_NAMES: &[&str] = &["main.py", "app.py", "run.py", "start.py"];

/// Find the main Python file in a project directory
///
/// Returns the filename relative to the project directory, or None when the
/// directory holds no .py file at all. The any-.py fallback scans the
/// listing in sorted order so the pick is stable across runs.
pub fn find_python_entry<P: AsRef<Path>>(project_path: P) -> Option<String> {
    let project_path = project_path.as_ref();

    for name in COMMON_ENTRY_NAMES {
        if project_path.join(name).exists() {
            return Some(name.to_string());
        }
    }

    let mut py_files: Vec<String> = fs::read_dir(project_path)
        .ok()?
        .flatten()
        .filter_map(|entry| entry.file_name().to_str().map(|s| s.to_string()))
        .filter(|name| name.ends_with(".py"))
        .collect();
    py_files.sort();

    py_files.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_main_py_preferred() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("helper.py"), "").unwrap();
        fs::write(temp.path().join("main.py"), "").unwrap();

        assert_eq!(find_python_entry(temp.path()).as_deref(), Some("main.py"));
    }

    #[test]
    fn test_conventional_name_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("run.py"), "").unwrap();
        fs::write(temp.path().join("app.py"), "").unwrap();

        // app.py outranks run.py
        assert_eq!(find_python_entry(temp.path()).as_deref(), Some("app.py"));
    }

    #[test]
    fn test_fallback_to_any_py_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("zeta.py"), "").unwrap();
        fs::write(temp.path().join("alpha.py"), "").unwrap();

        assert_eq!(find_python_entry(temp.path()).as_deref(), Some("alpha.py"));
    }

    #[test]
    fn test_no_python_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();

        assert_eq!(find_python_entry(temp.path()), None);
    }
}
