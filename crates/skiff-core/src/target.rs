//! Build-target discovery over the functions directory.

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;

/// Entry file expected at the root of each function directory.
const ENTRY_FILE: &str = "index.ts";

/// Directory under the functions root that holds shared code, never a
/// deployable function of its own.
const SHARED_DIR: &str = "shared";

/// A named deployable function: its source entry point and output directory.
///
/// Descriptors are constructed per invocation and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionTarget {
    /// Function name, as used on the command line
    pub name: String,
    /// Source file the bundler starts from
    pub entry_point: PathBuf,
    /// Directory receiving bundled output and staged deployment files
    pub out_dir: PathBuf,
}

impl FunctionTarget {
    fn for_name(project_dir: &Path, config: &ProjectConfig, name: &str) -> Self {
        Self {
            name: name.to_owned(),
            entry_point: project_dir
                .join(&config.functions_dir)
                .join(name)
                .join(ENTRY_FILE),
            out_dir: project_dir.join(&config.dist_dir).join(name),
        }
    }

    /// Resolve a single named function, verifying its entry point exists.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownFunction`](crate::Error::UnknownFunction) if the
    /// function directory or its entry file is missing.
    pub fn resolve(
        project_dir: &Path,
        config: &ProjectConfig,
        name: &str,
    ) -> crate::Result<Self> {
        let target = Self::for_name(project_dir, config, name);
        if !target.entry_point.is_file() {
            return Err(crate::Error::UnknownFunction {
                name: name.to_owned(),
                entry_point: target.entry_point,
            });
        }
        Ok(target)
    }

    /// Discover every function under the functions directory.
    ///
    /// A function is any subdirectory containing an `index.ts`, excluding the
    /// shared-code directory. Results are sorted by name so multi-target runs
    /// are deterministic. A missing functions directory yields an empty list.
    pub fn discover(project_dir: &Path, config: &ProjectConfig) -> crate::Result<Vec<Self>> {
        let functions_dir = project_dir.join(&config.functions_dir);
        if !functions_dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&functions_dir).map_err(|e| {
            crate::Error::FunctionsDirRead {
                path: functions_dir.clone(),
                source: e,
            }
        })?;

        let mut targets = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| crate::Error::FunctionsDirRead {
                path: functions_dir.clone(),
                source: e,
            })?;

            let Ok(name) = entry.file_name().into_string() else {
                tracing::warn!(path = %entry.path().display(), "skipping non-UTF-8 directory name");
                continue;
            };
            if name == SHARED_DIR {
                continue;
            }
            if !entry.path().join(ENTRY_FILE).is_file() {
                continue;
            }

            targets.push(Self::for_name(project_dir, config, &name));
        }

        targets.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(count = targets.len(), "functions discovered");
        Ok(targets)
    }
}
