//! Declared-version resolution from the working tree.
//!
//! The version is read explicitly from files on disk rather than by
//! importing the package, so no process-global state is touched:
//! `--set-version` wins outright, then `pyproject.toml`'s
//! `[project].version`, then a `__version__` assignment in the module
//! source itself.

use crate::types::{GateError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct PyProject {
    project: Option<ProjectTable>,
}

#[derive(Debug, Deserialize)]
struct ProjectTable {
    version: Option<String>,
}

/// Resolve the version string `package` declares under `root`.
pub fn resolve_version(package: &str, root: &Path, explicit: Option<&str>) -> Result<String> {
    if let Some(version) = explicit {
        debug!("Using explicitly supplied version: {}", version);
        return Ok(version.to_string());
    }

    if let Some(version) = pyproject_version(package, root)? {
        debug!("Resolved {} {} from pyproject.toml", package, version);
        return Ok(version);
    }

    if let Some(version) = module_version(package, root)? {
        debug!("Resolved {} {} from module source", package, version);
        return Ok(version);
    }

    Err(GateError::VersionResolution {
        package: package.to_string(),
        reason: format!(
            "no [project] version in pyproject.toml and no __version__ in {0}/__init__.py or {0}.py",
            package.replace('.', "/")
        ),
    })
}

/// Read `[project].version` from `pyproject.toml`, if the file and field exist.
fn pyproject_version(package: &str, root: &Path) -> Result<Option<String>> {
    let path = root.join("pyproject.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| GateError::VersionResolution {
        package: package.to_string(),
        reason: format!("{}: {}", path.display(), e),
    })?;

    let parsed: PyProject = toml::from_str(&content).map_err(|e| GateError::VersionResolution {
        package: package.to_string(),
        reason: format!("{}: {}", path.display(), e),
    })?;

    Ok(parsed.project.and_then(|p| p.version))
}

/// Scan the module source for a `__version__ = "..."` assignment.
///
/// A dotted package path maps to nested directories; `<pkg>/__init__.py`
/// is tried before `<pkg>.py`.
fn module_version(package: &str, root: &Path) -> Result<Option<String>> {
    let module_dir = package
        .split('.')
        .fold(root.to_path_buf(), |p, seg| p.join(seg));

    let candidates: [PathBuf; 2] = [
        module_dir.join("__init__.py"),
        module_dir.with_extension("py"),
    ];

    let pattern = Regex::new(r#"(?m)^__version__\s*=\s*["']([^"']+)["']"#)
        .expect("version pattern is valid");

    for path in candidates {
        if !path.exists() {
            continue;
        }
        let content = std::fs::read_to_string(&path).map_err(|e| GateError::VersionResolution {
            package: package.to_string(),
            reason: format!("{}: {}", path.display(), e),
        })?;

        if let Some(captures) = pattern.captures(&content) {
            return Ok(Some(captures[1].to_string()));
        }

        return Err(GateError::VersionResolution {
            package: package.to_string(),
            reason: format!("{} has no __version__ attribute", path.display()),
        });
    }

    Ok(None)
}
