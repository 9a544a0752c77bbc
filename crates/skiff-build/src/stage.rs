use std::path::{Path, PathBuf};

use skiff_core::config::{ProjectConfig, StageConfig};
use skiff_core::{DeployManifest, PackageManifest};

/// Auxiliary files copied into every staged output directory, beyond the
/// environment file. Source name equals destination name for these.
const AUX_FILES: &[&str] = &[".npmrc", ".gcloudignore"];

/// What happened to one auxiliary file during staging.
#[derive(Debug)]
pub enum CopyStatus {
    /// Copied and confirmed present at the destination.
    Copied { bytes: u64 },
    /// Source file absent from the project root; skipped.
    MissingSource,
    /// Copy or post-copy validation failed.
    Failed { source: std::io::Error },
}

/// One auxiliary file's staging outcome.
#[derive(Debug)]
pub struct CopyOutcome {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub status: CopyStatus,
}

impl CopyOutcome {
    pub fn copied(&self) -> bool {
        matches!(self.status, CopyStatus::Copied { .. })
    }
}

/// Result of a staging run: where the manifest went, and one outcome per
/// auxiliary file in the order they were attempted.
#[derive(Debug)]
pub struct StageReport {
    pub out_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub copies: Vec<CopyOutcome>,
}

/// Materialize deployment files for one function into `<dist_dir>/<function>/`.
///
/// Creates the output directory, derives and writes the deployment manifest
/// (fatal on failure), then copies the environment file and the fixed
/// auxiliary files. A missing or failing auxiliary copy does not block the
/// remaining ones.
pub fn stage_function(
    project_dir: &Path,
    function: &str,
    project: &ProjectConfig,
    stage: &StageConfig,
) -> Result<StageReport, StageError> {
    let out_dir = project_dir.join(&project.dist_dir).join(function);
    std::fs::create_dir_all(&out_dir).map_err(|e| StageError::CreateDir {
        path: out_dir.clone(),
        source: e,
    })?;

    // Deployment manifest, derived fresh from package.json on every run
    let manifest = PackageManifest::load(project_dir).map_err(StageError::Manifest)?;
    let deploy = DeployManifest::derive(&manifest, function);
    let manifest_path = out_dir.join("package.json");
    std::fs::write(&manifest_path, deploy.to_json()).map_err(|e| StageError::WriteManifest {
        path: manifest_path.clone(),
        source: e,
    })?;
    tracing::debug!(path = %manifest_path.display(), "deployment manifest written");

    let mut copies = Vec::new();
    copies.push(copy_file(
        &project_dir.join(&stage.env_file),
        &out_dir.join(".env"),
    ));
    for name in AUX_FILES {
        copies.push(copy_file(&project_dir.join(name), &out_dir.join(name)));
    }

    Ok(StageReport {
        out_dir,
        manifest_path,
        copies,
    })
}

/// Copy one file verbatim, then re-read the destination to confirm it landed.
fn copy_file(source: &Path, dest: &Path) -> CopyOutcome {
    let status = if !source.is_file() {
        CopyStatus::MissingSource
    } else {
        match std::fs::copy(source, dest).and_then(|_| std::fs::metadata(dest)) {
            Ok(meta) => CopyStatus::Copied { bytes: meta.len() },
            Err(e) => CopyStatus::Failed { source: e },
        }
    };

    CopyOutcome {
        source: source.to_path_buf(),
        dest: dest.to_path_buf(),
        status,
    }
}

/// First `n` lines of a file, for echoing staged environment files back to
/// the operator.
pub fn preview_lines(path: &Path, n: usize) -> std::io::Result<String> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().take(n).collect::<Vec<_>>().join("\n"))
}

#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to derive deployment manifest")]
    Manifest(#[source] skiff_core::Error),

    #[error("failed to write deployment manifest at {path}")]
    WriteManifest {
        path: PathBuf,
        source: std::io::Error,
    },
}
