use std::path::Path;

use skiff_core::SkiffConfig;

/// Renders the temporary type-checker configuration for one function.
///
/// The configuration extends the project's base one, restricts compilation to
/// the function's subtree plus shared code, and enables declaration-only
/// emission into the function's output directory.
pub struct TsconfigGenerator<'a> {
    config: &'a SkiffConfig,
    function: &'a str,
}

impl<'a> TsconfigGenerator<'a> {
    pub fn new(config: &'a SkiffConfig, function: &'a str) -> Self {
        Self { config, function }
    }

    pub fn render(&self) -> String {
        let functions_dir = &self.config.project.functions_dir;
        let dist_dir = &self.config.project.dist_dir;

        // Mirror the bundler aliases as type-checker path mappings
        let paths: serde_json::Map<String, serde_json::Value> = self
            .config
            .bundle
            .alias
            .iter()
            .map(|(alias, target)| {
                (
                    format!("{alias}/*"),
                    serde_json::json!([format!("./{target}/*")]),
                )
            })
            .collect();

        let document = serde_json::json!({
            "extends": format!("./{}", self.config.declarations.base_config),
            "compilerOptions": {
                "rootDir": format!("./{functions_dir}"),
                "outDir": format!("{dist_dir}/{}", self.function),
                "declaration": true,
                "emitDeclarationOnly": true,
                "paths": paths,
            },
            "include": [
                format!("{functions_dir}/{}/**/*", self.function),
                format!("{functions_dir}/shared/**/*"),
            ],
        });

        let mut out = serde_json::to_string_pretty(&document)
            .expect("tsconfig document serialization cannot fail");
        out.push('\n');
        out
    }
}

/// A type-checker configuration bound to a scope.
///
/// The file lives in the project root so the base configuration's relative
/// `extends` resolves, and is removed when this value drops, whether the
/// checker succeeded, failed, or was never reached.
pub struct TempTsconfig {
    file: tempfile::NamedTempFile,
}

impl TempTsconfig {
    /// Write the rendered configuration to a uniquely named file in the
    /// project root.
    pub fn write(
        project_dir: &Path,
        function: &str,
        content: &str,
    ) -> Result<Self, TsconfigError> {
        let file = tempfile::Builder::new()
            .prefix(&format!("tsconfig.{function}."))
            .suffix(".json")
            .tempfile_in(project_dir)
            .map_err(|e| TsconfigError::Create {
                dir: project_dir.to_path_buf(),
                source: e,
            })?;

        std::fs::write(file.path(), content).map_err(|e| TsconfigError::Write {
            path: file.path().to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %file.path().display(), "temporary tsconfig written");
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TsconfigError {
    #[error("failed to create temporary tsconfig in {dir}")]
    Create {
        dir: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write temporary tsconfig at {path}")]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
