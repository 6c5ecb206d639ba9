//! Integration tests for the swap tool.
//!
//! Run with: `cargo test --test test_swap`

mod common;

use std::sync::Arc;

use common::RecordingExecutor;
use oneinch_crosschain_mcp::{
    mcp::{SwapInput, Validated},
    services::{CommandSwapExecutor, UnconfiguredSwapExecutor},
    types::SwapExecution,
    AppError, OneInchServer,
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

fn server_with(executor: Arc<dyn oneinch_crosschain_mcp::services::SwapExecutor>) -> OneInchServer {
    let dir = tempfile::tempdir().unwrap();
    common::create_test_server("http://127.0.0.1:1", &dir.path().join("order-status.json"), executor)
}

fn input(params: serde_json::Value) -> Parameters<Validated<SwapInput>> {
    Parameters(serde_json::from_value(params).unwrap())
}

/// Successful swap reports the order hash and message.
#[tokio::test]
async fn test_swap_success() {
    let executor = RecordingExecutor::new(|| {
        Ok(Some(SwapExecution {
            order_hash: Some("0x1".to_string()),
            message: Some("ok".to_string()),
            error: None,
        }))
    });
    let server = server_with(executor.clone());

    let result = server.swap(input(json!({}))).await.unwrap();

    assert!(!common::is_error(&result));
    let text = common::result_text(&result);
    assert!(text.contains("0x1"));
    assert!(text.contains("ok"));

    let requests = executor.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].src_chain_id, 8453);
    assert_eq!(requests[0].dst_chain_id, 42161);
    assert_eq!(requests[0].amount, "1000000");
}

/// Small amounts are scaled to base units before reaching the executor.
#[tokio::test]
async fn test_swap_scales_small_amount() {
    let executor = RecordingExecutor::new(|| {
        Ok(Some(SwapExecution { order_hash: Some("0x2".to_string()), ..Default::default() }))
    });
    let server = server_with(executor.clone());

    server.swap(input(json!({"amount": "2.5", "invert": true}))).await.unwrap();

    let requests = executor.requests.lock().unwrap();
    assert_eq!(requests[0].amount, "2500000");
    assert!(requests[0].invert);
}

/// Executor errors become an error-flagged result.
#[tokio::test]
async fn test_swap_executor_error() {
    let executor = RecordingExecutor::new(|| Err(AppError::Executor("boom".to_string())));
    let server = server_with(executor);

    let result = server.swap(input(json!({}))).await.unwrap();

    assert!(common::is_error(&result));
    let text = common::result_text(&result);
    assert!(text.starts_with("Error:"));
    assert!(text.contains("boom"));
}

/// An executor-reported failure is flagged too.
#[tokio::test]
async fn test_swap_reported_failure() {
    let executor = RecordingExecutor::new(|| {
        Ok(Some(SwapExecution { error: Some("insufficient balance".to_string()), ..Default::default() }))
    });
    let server = server_with(executor);

    let result = server.swap(input(json!({}))).await.unwrap();

    assert!(common::is_error(&result));
    assert_eq!(common::result_text(&result), "Swap failed: insufficient balance");
}

/// Without an executor the tool explains what is missing.
#[tokio::test]
async fn test_swap_without_executor() {
    let server = server_with(Arc::new(UnconfiguredSwapExecutor));

    let result = server.swap(input(json!({}))).await.unwrap();

    assert!(common::is_error(&result));
    assert!(common::result_text(&result).contains("SWAP_EXECUTOR_COMMAND"));
}

/// A failing executor process reports its exit status.
#[cfg(unix)]
#[tokio::test]
async fn test_command_executor_nonzero_exit() {
    let executor = CommandSwapExecutor::from_command_line("false").unwrap();
    let server = server_with(Arc::new(executor));

    let result = server.swap(input(json!({}))).await.unwrap();

    assert!(common::is_error(&result));
    assert!(common::result_text(&result).contains("exit"));
}

/// `cat` echoes the request back: valid JSON, but no order hash.
#[cfg(unix)]
#[tokio::test]
async fn test_command_executor_receives_request_on_stdin() {
    let executor = CommandSwapExecutor::from_command_line("cat").unwrap();
    let server = server_with(Arc::new(executor));

    let result = server.swap(input(json!({}))).await.unwrap();

    assert!(common::is_error(&result));
    assert_eq!(common::result_text(&result), "Swap failed: executor returned no order hash");
}
