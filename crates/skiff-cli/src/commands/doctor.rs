use std::path::{Path, PathBuf};

use skiff_node::{CheckResult, NodeToolchain};

/// Run all project and toolchain checks without early return.
pub async fn doctor() -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let toolchain = NodeToolchain::new(&project_dir);
    let mut report = toolchain.doctor().await;

    report.package_manifest = presence_check(Path::new("package.json"));
    report.config_file = presence_check(Path::new("skiff.toml"));

    println!();
    println!("{report}");

    if !report.all_passed() {
        anyhow::bail!("some checks failed — see above for details");
    }

    Ok(())
}

fn presence_check(path: &Path) -> CheckResult {
    if path.exists() {
        CheckResult::ok("Found")
    } else {
        CheckResult::fail("Not found")
    }
}
