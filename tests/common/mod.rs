//! Common utilities for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use oneinch_crosschain_mcp::{
    services::SwapExecutor,
    types::{SwapExecution, SwapRequest},
    Config, OneInchServer, Result,
};
use rmcp::model::CallToolResult;

pub const TEST_API_KEY: &str = "test-key";

/// Configuration pointing at a local portfolio API and status file.
pub fn test_config(portfolio_api_url: &str, order_status_file: &Path) -> Config {
    let mut config = Config::new(TEST_API_KEY);
    config.portfolio_api_url = portfolio_api_url.to_string();
    config.order_status_file = order_status_file.to_path_buf();
    config.log_level = "warn".to_string();
    config
}

/// Executor returning a canned reply and recording what it was asked to do.
pub struct RecordingExecutor {
    reply: fn() -> Result<Option<SwapExecution>>,
    pub requests: Mutex<Vec<SwapRequest>>,
}

impl RecordingExecutor {
    pub fn new(reply: fn() -> Result<Option<SwapExecution>>) -> Arc<Self> {
        Arc::new(Self { reply, requests: Mutex::new(Vec::new()) })
    }
}

#[async_trait]
impl SwapExecutor for RecordingExecutor {
    async fn execute(&self, request: &SwapRequest) -> Result<Option<SwapExecution>> {
        self.requests.lock().unwrap().push(request.clone());
        (self.reply)()
    }
}

/// Server wired to a local portfolio API, a status file and an executor.
pub fn create_test_server(
    portfolio_api_url: &str,
    order_status_file: &Path,
    executor: Arc<dyn SwapExecutor>,
) -> OneInchServer {
    OneInchServer::with_executor(test_config(portfolio_api_url, order_status_file), executor)
        .expect("server should build")
}

/// First text block of a tool result.
pub fn result_text(result: &CallToolResult) -> String {
    let value = serde_json::to_value(result).unwrap();
    value["content"][0]["text"].as_str().unwrap_or_default().to_string()
}

/// Whether a tool result is flagged as an error.
pub fn is_error(result: &CallToolResult) -> bool {
    let value = serde_json::to_value(result).unwrap();
    value["isError"].as_bool().unwrap_or(false)
}
