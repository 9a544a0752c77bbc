use std::path::Path;

use crate::tool::ToolError;

/// Abstraction over Node toolchain execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait NodeToolExecutor: Send + Sync {
    /// Execute a tool and capture stdout.
    async fn exec(&self, program: &Path, args: &[String]) -> Result<String, ToolError>;

    /// Execute a tool, streaming output to the terminal.
    async fn exec_streaming(&self, program: &Path, args: &[String]) -> Result<(), ToolError>;
}

/// Real process executor.
pub struct RealExecutor;

fn program_name(program: &Path) -> String {
    program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string())
}

impl NodeToolExecutor for RealExecutor {
    async fn exec(&self, program: &Path, args: &[String]) -> Result<String, ToolError> {
        use std::process::Stdio;

        let output = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ToolError::NotFound {
                program: program_name(program),
                source: e,
            })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| ToolError::InvalidUtf8 {
                program: program_name(program),
                source: e,
            })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            Err(ToolError::CommandFailed {
                program: program_name(program),
                args: args.to_vec(),
                stderr,
            })
        }
    }

    async fn exec_streaming(&self, program: &Path, args: &[String]) -> Result<(), ToolError> {
        use std::process::Stdio;

        let status = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ToolError::NotFound {
                program: program_name(program),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::CommandFailed {
                program: program_name(program),
                args: args.to_vec(),
                stderr: format!("exit code: {status}"),
            })
        }
    }
}
