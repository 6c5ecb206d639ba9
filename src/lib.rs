//! 1inch Cross-Chain Swap MCP Server Library
//!
//! A Model Context Protocol server that places cross-chain swaps through an
//! external 1inch Fusion+ executor and exposes the 1inch Portfolio API.
//!
//! # Features
//!
//! - **Cross-Chain Swaps**: Forward swap requests to a configured executor
//! - **Order Status**: Read order progress from the executor's status file,
//!   as a tool or as the `swaps://{orderHash}` resource
//! - **Portfolio Data**: Protocol values, token details, total value and value charts
//!
//! # Example
//!
//! ```rust,ignore
//! use oneinch_crosschain_mcp::{Config, OneInchServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let server = OneInchServer::new(config)?;
//!     // Run server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod mcp;
pub mod services;
pub mod types;

pub use config::Config;
pub use error::{AppError, Result};
pub use mcp::OneInchServer;
