use std::path::PathBuf;

use skiff_core::{FunctionTarget, SkiffConfig};
use skiff_node::NodeToolchain;

/// Bundle the named function, or every discovered function for `all`.
pub async fn bundle(target: &str) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let config = SkiffConfig::load(&project_dir)?;
    let node_env = super::node_env();

    let targets = if target == "all" {
        FunctionTarget::discover(&project_dir, &config.project)?
    } else {
        vec![FunctionTarget::resolve(&project_dir, &config.project, target)?]
    };

    if targets.is_empty() {
        println!(
            "No functions found under {} — nothing to build.",
            config.project.functions_dir
        );
        return Ok(());
    }

    let toolchain = NodeToolchain::new(&project_dir);

    // Sequential on purpose: one failing target aborts the whole run
    for function in &targets {
        println!(
            "Bundling {} -> {}",
            function.entry_point.display(),
            function.out_dir.display()
        );
        toolchain.bundle(function, &config.bundle, &node_env).await?;
        println!("Bundled {}", function.name);
    }

    println!("Build finished.");
    Ok(())
}
