use std::path::{Path, PathBuf};

use mockall::mock;
use skiff_core::config::BundleConfig;
use skiff_core::FunctionTarget;
use skiff_node::executor::NodeToolExecutor;
use skiff_node::tool::ToolError;
use skiff_node::toolchain::{BundleError, NodeToolchain, TypecheckError};
use tempfile::TempDir;

mock! {
    Executor {}

    impl NodeToolExecutor for Executor {
        async fn exec(&self, program: &Path, args: &[String]) -> Result<String, ToolError>;
        async fn exec_streaming(&self, program: &Path, args: &[String]) -> Result<(), ToolError>;
    }
}

fn ticket_target(root: &Path) -> FunctionTarget {
    FunctionTarget {
        name: "ticket".to_owned(),
        entry_point: root.join("src/ticket/index.ts"),
        out_dir: root.join("dist/ticket"),
    }
}

fn command_failed(program: &str) -> ToolError {
    ToolError::CommandFailed {
        program: program.to_owned(),
        args: vec![],
        stderr: "boom".to_owned(),
    }
}

// ── Bundle ──

#[tokio::test]
async fn bundle_invokes_esbuild_with_fixed_flags() {
    let tmp = TempDir::new().unwrap();
    let mut mock = MockExecutor::new();

    mock.expect_exec_streaming()
        .withf(|program, args| {
            program == Path::new("esbuild")
                && args.contains(&"--bundle".to_owned())
                && args.contains(&"--platform=node".to_owned())
                && args.contains(&"--format=cjs".to_owned())
                && args.contains(&"--external:googleapis".to_owned())
                && args
                    .contains(&"--define:process.env.NODE_ENV=\"development\"".to_owned())
        })
        .times(1)
        .returning(|_, _| Ok(()));

    let toolchain = NodeToolchain::with_executor(tmp.path(), mock);
    toolchain
        .bundle(
            &ticket_target(tmp.path()),
            &BundleConfig::default(),
            "development",
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn bundle_prefers_local_node_modules_binary() {
    let tmp = TempDir::new().unwrap();
    let bin_dir = tmp.path().join("node_modules/.bin");
    std::fs::create_dir_all(&bin_dir).unwrap();
    std::fs::write(bin_dir.join("esbuild"), "#!/bin/sh\n").unwrap();

    let local = bin_dir.join("esbuild");
    let mut mock = MockExecutor::new();
    mock.expect_exec_streaming()
        .withf(move |program, _| program == local)
        .times(1)
        .returning(|_, _| Ok(()));

    let toolchain = NodeToolchain::with_executor(tmp.path(), mock);
    toolchain
        .bundle(
            &ticket_target(tmp.path()),
            &BundleConfig::default(),
            "development",
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn bundle_failure_names_the_entry_point() {
    let tmp = TempDir::new().unwrap();
    let mut mock = MockExecutor::new();
    mock.expect_exec_streaming()
        .returning(|_, _| Err(command_failed("esbuild")));

    let toolchain = NodeToolchain::with_executor(tmp.path(), mock);
    let result = toolchain
        .bundle(
            &ticket_target(tmp.path()),
            &BundleConfig::default(),
            "development",
        )
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, BundleError::Bundle { .. }));
    assert!(err.to_string().contains("index.ts"), "got: {err}");
}

// ── Declarations ──

#[tokio::test]
async fn emit_declarations_points_tsc_at_the_config() {
    let tmp = TempDir::new().unwrap();
    let tsconfig = tmp.path().join("tsconfig.ticket.abc123.json");
    let expected = tsconfig.display().to_string();

    let mut mock = MockExecutor::new();
    mock.expect_exec_streaming()
        .withf(move |program, args| {
            program == Path::new("tsc") && args.len() == 2 && args[0] == "-p" && args[1] == expected
        })
        .times(1)
        .returning(|_, _| Ok(()));

    let toolchain = NodeToolchain::with_executor(tmp.path(), mock);
    toolchain.emit_declarations(&tsconfig).await.unwrap();
}

#[tokio::test]
async fn emit_declarations_surfaces_checker_failure() {
    let tmp = TempDir::new().unwrap();
    let mut mock = MockExecutor::new();
    mock.expect_exec_streaming()
        .returning(|_, _| Err(command_failed("tsc")));

    let toolchain = NodeToolchain::with_executor(tmp.path(), mock);
    let result = toolchain
        .emit_declarations(&PathBuf::from("tsconfig.ticket.tmp.json"))
        .await;

    assert!(matches!(result, Err(TypecheckError::Emit { .. })));
}

// ── Doctor ──

#[tokio::test]
async fn doctor_reports_versions_for_available_tools() {
    let tmp = TempDir::new().unwrap();
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|program, _| program == Path::new("node"))
        .returning(|_, _| Ok("v22.12.0\n".to_owned()));
    mock.expect_exec()
        .withf(|program, _| program == Path::new("esbuild"))
        .returning(|_, _| Ok("0.24.0\n".to_owned()));
    mock.expect_exec()
        .withf(|program, _| program == Path::new("tsc"))
        .returning(|_, _| Ok("Version 5.6.3\n".to_owned()));

    let toolchain = NodeToolchain::with_executor(tmp.path(), mock);
    let report = toolchain.doctor().await;

    assert!(report.node.passed);
    assert_eq!(report.node.detail, "v22.12.0");
    assert!(report.esbuild.passed);
    assert_eq!(report.esbuild.detail, "0.24.0");
    assert!(report.tsc.passed);
    assert_eq!(report.tsc.detail, "5.6.3");
}

#[tokio::test]
async fn doctor_keeps_probing_after_a_missing_tool() {
    let tmp = TempDir::new().unwrap();
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|program, _| program == Path::new("node"))
        .returning(|_, _| Ok("v22.12.0\n".to_owned()));
    mock.expect_exec()
        .withf(|program, _| program == Path::new("esbuild"))
        .returning(|_, _| {
            Err(ToolError::NotFound {
                program: "esbuild".to_owned(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
        });
    mock.expect_exec()
        .withf(|program, _| program == Path::new("tsc"))
        .returning(|_, _| Ok("Version 5.6.3\n".to_owned()));

    let toolchain = NodeToolchain::with_executor(tmp.path(), mock);
    let report = toolchain.doctor().await;

    assert!(report.node.passed);
    assert!(!report.esbuild.passed);
    assert!(report.tsc.passed);
    assert!(!report.all_passed());
}
