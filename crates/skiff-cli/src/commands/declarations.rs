use std::path::PathBuf;

use skiff_build::{TempTsconfig, TsconfigGenerator};
use skiff_core::{FunctionTarget, SkiffConfig};
use skiff_node::NodeToolchain;

/// Emit declaration files for one function through a scope-bound temporary
/// checker configuration.
pub async fn declarations(function: &str) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let config = SkiffConfig::load(&project_dir)?;
    let target = FunctionTarget::resolve(&project_dir, &config.project, function)?;

    println!("Generating type declarations for {function}...");

    let content = TsconfigGenerator::new(&config, function).render();
    let tsconfig = TempTsconfig::write(&project_dir, function, &content)?;

    let toolchain = NodeToolchain::new(&project_dir);
    toolchain.emit_declarations(tsconfig.path()).await?;

    println!("Declarations written to {}", target.out_dir.display());
    Ok(())
    // tsconfig drops here; the temporary file is removed on the error paths above too
}
