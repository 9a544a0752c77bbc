use std::path::{Path, PathBuf};

use skiff_core::config::BundleConfig;
use skiff_core::FunctionTarget;

use crate::executor::{NodeToolExecutor, RealExecutor};
use crate::tool::ToolError;

/// Node toolchain operations, parameterized over the executor for testability.
///
/// Tools are resolved from the project's `node_modules/.bin/` when present,
/// falling back to `PATH`.
pub struct NodeToolchain<E: NodeToolExecutor = RealExecutor> {
    executor: E,
    project_dir: PathBuf,
}

impl NodeToolchain<RealExecutor> {
    pub fn new(project_dir: &Path) -> Self {
        Self {
            executor: RealExecutor,
            project_dir: project_dir.to_path_buf(),
        }
    }
}

impl<E: NodeToolExecutor> NodeToolchain<E> {
    pub fn with_executor(project_dir: &Path, executor: E) -> Self {
        Self {
            executor,
            project_dir: project_dir.to_path_buf(),
        }
    }

    fn resolve_tool(&self, name: &str) -> PathBuf {
        let local = self
            .project_dir
            .join("node_modules")
            .join(".bin")
            .join(name);
        if local.is_file() {
            local
        } else {
            PathBuf::from(name)
        }
    }

    // ── Bundling ──

    /// Bundle one function's entry point into its output directory, streaming
    /// bundler output to the terminal.
    pub async fn bundle(
        &self,
        target: &FunctionTarget,
        config: &BundleConfig,
        node_env: &str,
    ) -> Result<(), BundleError> {
        let program = self.resolve_tool("esbuild");
        let args = bundle_args(target, config, node_env);

        tracing::debug!(
            entry = %target.entry_point.display(),
            out_dir = %target.out_dir.display(),
            "invoking esbuild"
        );

        self.executor
            .exec_streaming(&program, &args)
            .await
            .map_err(|e| BundleError::Bundle {
                entry: target.entry_point.clone(),
                source: e,
            })
    }

    // ── Declarations ──

    /// Run the type checker against a project configuration file, streaming
    /// its output to the terminal.
    pub async fn emit_declarations(&self, tsconfig: &Path) -> Result<(), TypecheckError> {
        let program = self.resolve_tool("tsc");
        let args = vec!["-p".to_owned(), tsconfig.display().to_string()];

        self.executor
            .exec_streaming(&program, &args)
            .await
            .map_err(|e| TypecheckError::Emit { source: e })
    }

    // ── Doctor ──

    /// Probe every toolchain binary without early return.
    /// Returns a report with pass/fail for each check item.
    pub async fn doctor(&self) -> ToolchainReport {
        let mut report = ToolchainReport::default();
        report.node = self.probe("node").await;
        report.esbuild = self.probe("esbuild").await;
        report.tsc = self.probe("tsc").await;
        report
    }

    async fn probe(&self, name: &str) -> CheckResult {
        let program = self.resolve_tool(name);
        let args = vec!["--version".to_owned()];

        match self.executor.exec(&program, &args).await {
            Ok(version) => {
                // tsc prints "Version X.Y.Z", the others print the bare number
                let version = version
                    .lines()
                    .next()
                    .map(|line| line.strip_prefix("Version ").unwrap_or(line))
                    .unwrap_or_default();
                CheckResult::ok(version.trim())
            }
            Err(e) => CheckResult::fail(&e.to_string()),
        }
    }
}

/// Assemble the bundler command line for one target.
fn bundle_args(target: &FunctionTarget, config: &BundleConfig, node_env: &str) -> Vec<String> {
    let mut args = vec![
        target.entry_point.display().to_string(),
        "--bundle".to_owned(),
        format!("--outdir={}", target.out_dir.display()),
        format!("--platform={}", config.platform),
        format!("--target={}", config.target),
        format!("--format={}", config.format),
    ];

    if config.minify {
        args.push("--minify".to_owned());
    }
    if config.sourcemap {
        args.push("--sourcemap".to_owned());
    }
    if config.metafile {
        args.push(format!(
            "--metafile={}",
            target.out_dir.join("meta.json").display()
        ));
    }

    for pattern in &config.external {
        args.push(format!("--external:{pattern}"));
    }
    for (alias, path) in &config.alias {
        args.push(format!("--alias:{alias}={path}"));
    }

    // Inlined as a JSON string literal, not a bare identifier
    args.push(format!("--define:process.env.NODE_ENV=\"{node_env}\""));

    args
}

// ── Doctor types ──

#[derive(Debug, Default)]
pub struct ToolchainReport {
    pub node: CheckResult,
    pub esbuild: CheckResult,
    pub tsc: CheckResult,
    pub package_manifest: CheckResult,
    pub config_file: CheckResult,
}

impl ToolchainReport {
    pub fn all_passed(&self) -> bool {
        self.node.passed
            && self.esbuild.passed
            && self.tsc.passed
            && self.package_manifest.passed
            && self.config_file.passed
    }
}

impl std::fmt::Display for ToolchainReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  [{}] node          {}", self.node.icon(), self.node.detail)?;
        writeln!(
            f,
            "  [{}] esbuild       {}",
            self.esbuild.icon(),
            self.esbuild.detail
        )?;
        writeln!(f, "  [{}] tsc           {}", self.tsc.icon(), self.tsc.detail)?;
        writeln!(
            f,
            "  [{}] package.json  {}",
            self.package_manifest.icon(),
            self.package_manifest.detail
        )?;
        write!(
            f,
            "  [{}] skiff.toml    {}",
            self.config_file.icon(),
            self.config_file.detail
        )
    }
}

#[derive(Debug, Default, Clone)]
pub struct CheckResult {
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    pub fn ok(detail: &str) -> Self {
        Self {
            passed: true,
            detail: detail.to_owned(),
        }
    }

    pub fn fail(detail: &str) -> Self {
        Self {
            passed: false,
            detail: detail.to_owned(),
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.passed { "OK" } else { "NG" }
    }
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("bundling failed for {entry}")]
    Bundle {
        entry: PathBuf,
        source: ToolError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum TypecheckError {
    #[error("declaration emission failed")]
    Emit { source: ToolError },
}
