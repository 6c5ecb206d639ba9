//! Cross-chain swap executor seam.
//!
//! The executor places Fusion+ orders and maintains the order status file.
//! This crate only hands it a [`SwapRequest`] and reads back what it reports.

use std::process::Stdio;

use async_trait::async_trait;
use serde_json::Value;
use tokio::{io::AsyncWriteExt, process::Command};

use crate::{
    error::{AppError, Result},
    types::{SwapExecution, SwapRequest},
};

/// Trait for swap execution backends.
///
/// `Ok(None)` means the executor finished without producing a result.
#[async_trait]
pub trait SwapExecutor: Send + Sync {
    /// Submit a swap.
    async fn execute(&self, request: &SwapRequest) -> Result<Option<SwapExecution>>;
}

/// Runs an external program per swap.
///
/// The request is written to stdin as JSON; the program prints its result as
/// JSON on stdout (`null`, `false` or nothing when there is no result).
#[derive(Debug, Clone)]
pub struct CommandSwapExecutor {
    program: String,
    args: Vec<String>,
}

impl CommandSwapExecutor {
    /// Build from a whitespace-separated command line.
    pub fn from_command_line(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| AppError::Config("Swap executor command is empty".into()))?;
        Ok(Self { program, args: parts.collect() })
    }

    /// Program that will be spawned.
    pub fn program(&self) -> &str {
        &self.program
    }
}

/// Interpret executor stdout.
pub fn parse_execution_output(stdout: &str) -> Result<Option<SwapExecution>> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match serde_json::from_str::<Value>(trimmed)? {
        Value::Null | Value::Bool(false) => Ok(None),
        value @ Value::Object(_) => Ok(Some(serde_json::from_value(value)?)),
        other => Err(AppError::Executor(format!("Unexpected executor output: {}", other))),
    }
}

#[async_trait]
impl SwapExecutor for CommandSwapExecutor {
    async fn execute(&self, request: &SwapRequest) -> Result<Option<SwapExecution>> {
        tracing::debug!(program = %self.program, "Spawning swap executor");

        let payload = serde_json::to_vec(request)?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                AppError::Executor(format!("Failed to start '{}': {}", self.program, e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&payload).await?;
            // Dropping stdin closes the pipe so the executor sees EOF.
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Executor(if stderr.is_empty() {
                format!("executor exited with {}", output.status)
            } else {
                stderr
            }));
        }

        parse_execution_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Used when no executor command is configured.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredSwapExecutor;

#[async_trait]
impl SwapExecutor for UnconfiguredSwapExecutor {
    async fn execute(&self, _request: &SwapRequest) -> Result<Option<SwapExecution>> {
        Err(AppError::Config("SWAP_EXECUTOR_COMMAND is not set".into()))
    }
}
