//! MCP server module.
//!
//! Contains the MCP server implementation, tool parameter schemas and the
//! swap status resource.

pub mod params;
pub mod server;

pub use params::{
    PortfolioValueInput, SwapInput, SwapStatusInput, TokensDetailsInput, Validated,
    ValueChartInput,
};
pub use server::OneInchServer;
