use std::path::PathBuf;

use skiff_build::stage::{preview_lines, stage_function, CopyStatus};
use skiff_core::SkiffConfig;

/// Number of environment-file lines echoed back for operator visibility.
const ENV_PREVIEW_LINES: usize = 3;

/// Materialize deployment files for one function.
pub async fn stage(function: &str) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let config = SkiffConfig::load(&project_dir)?;

    println!("Staging deployment files for {function}...");
    let report = stage_function(&project_dir, function, &config.project, &config.stage)?;

    println!("Wrote {}", report.manifest_path.display());

    for copy in &report.copies {
        match &copy.status {
            CopyStatus::Copied { bytes } => {
                println!(
                    "Copied {} -> {} ({bytes} bytes)",
                    copy.source.display(),
                    copy.dest.display()
                );
            }
            CopyStatus::MissingSource => {
                eprintln!("warning: {} not found, skipping", copy.source.display());
            }
            CopyStatus::Failed { source } => {
                eprintln!(
                    "warning: failed to copy {} -> {}: {source}",
                    copy.source.display(),
                    copy.dest.display()
                );
            }
        }
    }

    // Echo the staged environment file's first lines
    let env_copied = report
        .copies
        .iter()
        .any(|c| c.dest.ends_with(".env") && c.copied());
    if env_copied {
        let env_dest = report.out_dir.join(".env");
        match preview_lines(&env_dest, ENV_PREVIEW_LINES) {
            Ok(preview) => {
                println!("First lines of {}:", env_dest.display());
                println!("{preview}");
            }
            Err(e) => eprintln!("warning: could not read back {}: {e}", env_dest.display()),
        }
    }

    println!("Staging finished.");
    Ok(())
}
