//! MCP server implementation.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{
        AnnotateAble, CallToolResult, Content, Implementation, ListResourceTemplatesResult,
        ListResourcesResult, PaginatedRequestParam, RawResource, RawResourceTemplate,
        ReadResourceRequestParam, ReadResourceResult, ResourceContents, ResourceTemplate,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use crate::{
    config::Config,
    error::AppError,
    mcp::params::{
        PortfolioValueInput, SwapInput, SwapStatusInput, TokensDetailsInput, Validated,
        ValueChartInput,
    },
    services::{
        portfolio::endpoints, CommandSwapExecutor, OrderStatusReader, PortfolioClient,
        SwapDispatcher, SwapExecutor, UnconfiguredSwapExecutor,
    },
    types::PortfolioQuery,
};

/// URI scheme of the swap status resource.
pub const SWAPS_URI_SCHEME: &str = "swaps://";

/// Extract the order hash from a `swaps://{orderHash}` URI.
///
/// Returns `None` for other schemes and `Some(None)` when the path is empty.
pub fn order_hash_from_uri(uri: &str) -> Option<Option<&str>> {
    let rest = uri.strip_prefix(SWAPS_URI_SCHEME)?;
    let hash = rest.split(['?', '#']).next().unwrap_or_default().trim_matches('/');
    Some(if hash.is_empty() { None } else { Some(hash) })
}

/// Template advertising the per-order form of the swap status resource.
pub fn swap_status_template() -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: format!("{SWAPS_URI_SCHEME}{{orderHash}}"),
        name: "swap-order-status".to_string(),
        title: None,
        description: Some("Status of a single swap order, looked up by order hash.".to_string()),
        mime_type: Some("text/plain".to_string()),
    }
    .no_annotation()
}

/// 1inch cross-chain swap and portfolio MCP server.
///
/// Provides tools for placing swaps, checking their status and reading
/// portfolio data.
#[derive(Clone)]
pub struct OneInchServer {
    portfolio: PortfolioClient,
    swaps: SwapDispatcher,
    order_status: OrderStatusReader,
    tool_router: ToolRouter<Self>,
}

impl OneInchServer {
    /// Create a new server.
    ///
    /// No network calls are made here. Without `swap_executor_command` the
    /// swap tool reports a configuration error on every call.
    pub fn new(config: Config) -> crate::error::Result<Self> {
        let executor: Arc<dyn SwapExecutor> = match config.swap_executor_command.as_deref() {
            Some(command) => Arc::new(CommandSwapExecutor::from_command_line(command)?),
            None => {
                tracing::warn!("SWAP_EXECUTOR_COMMAND not set, swaps are disabled");
                Arc::new(UnconfiguredSwapExecutor)
            }
        };
        Self::with_executor(config, executor)
    }

    /// Create a server with an explicit swap executor.
    pub fn with_executor(
        config: Config,
        executor: Arc<dyn SwapExecutor>,
    ) -> crate::error::Result<Self> {
        tracing::info!("Initializing 1inch cross-chain MCP server");

        let portfolio = PortfolioClient::new(&config)?;
        let swaps = SwapDispatcher::new(executor);
        let order_status = OrderStatusReader::new(config.order_status_file.clone());

        tracing::info!(
            portfolio_api = %config.portfolio_api_url,
            order_status_file = %config.order_status_file.display(),
            "Server initialized"
        );

        Ok(Self { portfolio, swaps, order_status, tool_router: Self::tool_router() })
    }

    async fn portfolio_text(
        &self,
        endpoint: &str,
        query: PortfolioQuery,
    ) -> crate::error::Result<String> {
        let value = self.portfolio.query(endpoint, &query).await?;
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Run a portfolio request and render it as a tool result.
    async fn portfolio_tool(
        &self,
        endpoint: &str,
        what: &str,
        query: PortfolioQuery,
    ) -> CallToolResult {
        match self.portfolio_text(endpoint, query).await {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                tracing::warn!(endpoint, error = %e, "Portfolio request failed");
                CallToolResult::error(vec![Content::text(format!("Error fetching {what}: {e}"))])
            }
        }
    }

    /// Read a `swaps://{orderHash}` resource.
    ///
    /// An empty path lists every order. A store that cannot be read is
    /// reported in the content text, since resources carry no error flag.
    pub async fn read_swap_resource(
        &self,
        uri: &str,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        let order_hash = order_hash_from_uri(uri).ok_or_else(|| {
            McpError::invalid_params(format!("Unknown resource URI: {uri}"), None)
        })?;
        tracing::info!(uri, "swap-status resource read");

        let text = self
            .order_status
            .read_status(order_hash)
            .await
            .unwrap_or_else(|e: AppError| format!("Error reading swap status: {e}"));

        Ok(ReadResourceResult { contents: vec![ResourceContents::text(text, uri)] })
    }
}

#[tool_router]
impl OneInchServer {
    /// Place a cross-chain swap through 1inch Fusion+.
    #[tool(
        name = "swap",
        description = "Execute a cross-chain token swap via 1inch Fusion+. Amounts below 1000000 are treated as whole tokens with 6 decimals."
    )]
    pub async fn swap(
        &self,
        Parameters(Validated(input)): Parameters<Validated<SwapInput>>,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::info!(
            src_chain = input.src_chain_id,
            dst_chain = input.dst_chain_id,
            amount = %input.amount,
            "swap called"
        );

        let outcome = self.swaps.dispatch(input.into()).await;
        let content = vec![Content::text(outcome.text())];
        Ok(if outcome.is_error() {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        })
    }

    #[tool(
        name = "portfolio-protocols-value",
        description = "Get the current value of DeFi protocol positions for the given addresses"
    )]
    pub async fn portfolio_protocols_value(
        &self,
        Parameters(Validated(input)): Parameters<Validated<PortfolioValueInput>>,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::info!(chain_id = input.chain_id, "portfolio-protocols-value called");
        Ok(self
            .portfolio_tool(endpoints::PROTOCOLS_CURRENT_VALUE, "protocols value", input.into())
            .await)
    }

    #[tool(
        name = "portfolio-tokens-details",
        description = "Get ERC20 token holdings with profit and loss details for the given addresses"
    )]
    pub async fn portfolio_tokens_details(
        &self,
        Parameters(Validated(input)): Parameters<Validated<TokensDetailsInput>>,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::info!(
            chain_id = input.chain_id,
            timerange = %input.timerange,
            "portfolio-tokens-details called"
        );
        Ok(self.portfolio_tool(endpoints::ERC20_DETAILS, "tokens details", input.into()).await)
    }

    #[tool(
        name = "portfolio-general-value",
        description = "Get the total current value of the given addresses"
    )]
    pub async fn portfolio_general_value(
        &self,
        Parameters(Validated(input)): Parameters<Validated<PortfolioValueInput>>,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::info!(chain_id = input.chain_id, "portfolio-general-value called");
        Ok(self
            .portfolio_tool(endpoints::GENERAL_CURRENT_VALUE, "general value", input.into())
            .await)
    }

    #[tool(
        name = "portfolio-value-chart",
        description = "Get the historical portfolio value chart for the given addresses"
    )]
    pub async fn portfolio_value_chart(
        &self,
        Parameters(Validated(input)): Parameters<Validated<ValueChartInput>>,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::info!(
            chain_id = input.chain_id,
            timerange = %input.timerange,
            "portfolio-value-chart called"
        );
        Ok(self.portfolio_tool(endpoints::GENERAL_VALUE_CHART, "value chart", input.into()).await)
    }

    /// Report swap order status from the executor's status file.
    #[tool(
        name = "swap-status",
        description = "Get the status of a cross-chain swap order, or of all orders when no hash is given"
    )]
    pub async fn swap_status(
        &self,
        Parameters(Validated(input)): Parameters<Validated<SwapStatusInput>>,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::info!(order_hash = ?input.order_hash, "swap-status called");

        Ok(match self.order_status.read_status(input.order_hash.as_deref()).await {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => CallToolResult::error(vec![Content::text(format!(
                "Error reading swap status: {e}"
            ))]),
        })
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for OneInchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().enable_resources().build(),
            server_info: Implementation {
                name: "oneinch-crosschain-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "1inch Cross-Chain Swap MCP Server. Provides tools for executing cross-chain \
                 swaps, checking order status (also as swaps://{orderHash}) and querying \
                 1inch portfolio data."
                    .to_string(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        let mut resource = RawResource::new(SWAPS_URI_SCHEME, "swap-status".to_string());
        resource.description = Some(
            "Status of all swap orders. Append an order hash for a single order.".to_string(),
        );
        Ok(ListResourcesResult::with_all_items(vec![resource.no_annotation()]))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(vec![swap_status_template()]))
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri, .. }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        self.read_swap_resource(&uri).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_hash_from_uri() {
        assert_eq!(order_hash_from_uri("swaps://0xabc"), Some(Some("0xabc")));
        assert_eq!(order_hash_from_uri("swaps:///0xabc/"), Some(Some("0xabc")));
        assert_eq!(order_hash_from_uri("swaps://"), Some(None));
        assert_eq!(order_hash_from_uri("swaps:///"), Some(None));
        assert_eq!(order_hash_from_uri("swaps://0xabc?x=1"), Some(Some("0xabc")));
        assert_eq!(order_hash_from_uri("file:///etc/passwd"), None);
    }

    #[test]
    fn test_swap_status_template() {
        let template = swap_status_template();
        assert_eq!(template.raw.uri_template, "swaps://{orderHash}");
        assert_eq!(template.raw.name, "swap-order-status");
    }

    #[test]
    fn test_tool_names_registered() {
        let server = OneInchServer::new(Config::new("test-key")).unwrap();
        let mut names: Vec<String> =
            server.tool_router.list_all().into_iter().map(|tool| tool.name.to_string()).collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "portfolio-general-value",
                "portfolio-protocols-value",
                "portfolio-tokens-details",
                "portfolio-value-chart",
                "swap",
                "swap-status",
            ]
        );
    }
}
