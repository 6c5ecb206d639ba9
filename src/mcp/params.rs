//! Tool parameter schemas.
//!
//! Every field that may be omitted carries a serde default, so a call that
//! leaves it out sees exactly the advertised default. Type and enumeration
//! violations are rejected by rmcp before a handler runs, and [`Validated`]
//! prefixes the message with the path of the offending field.

use rmcp::schemars;
use serde::{de::Error as _, Deserialize, Deserializer};

use crate::types::{PortfolioQuery, SwapRequest, TimeRange};

/// USDC on Base.
pub const DEFAULT_SRC_TOKEN: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";
/// USDC on Arbitrum.
pub const DEFAULT_DST_TOKEN: &str = "0xaf88d065e77c8cC2239327C5EDb3A432268e5831";

/// Tool arguments that report the offending field when they fail to parse.
///
/// The advertised schema is the one of `T`.
#[derive(Debug, Clone, serde::Serialize, schemars::JsonSchema)]
#[serde(transparent)]
pub struct Validated<T>(pub T);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Validated<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_path_to_error::deserialize(deserializer).map(Validated).map_err(|err| {
            let path = err.path().to_string();
            D::Error::custom(format!("{}: {}", path, err.into_inner()))
        })
    }
}

fn default_src_chain_id() -> u64 {
    8453
}

fn default_dst_chain_id() -> u64 {
    42161
}

fn default_src_token() -> String {
    DEFAULT_SRC_TOKEN.to_string()
}

fn default_dst_token() -> String {
    DEFAULT_DST_TOKEN.to_string()
}

fn default_amount() -> String {
    "1000000".to_string()
}

fn default_chain_id() -> u64 {
    1
}

fn default_true() -> bool {
    true
}

fn default_closed_threshold() -> f64 {
    1.0
}

fn default_chart_timerange() -> TimeRange {
    TimeRange::OneMonth
}

/// Input parameters for the swap tool.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwapInput {
    /// Source chain ID. Default: 8453 (Base).
    #[serde(default = "default_src_chain_id")]
    pub src_chain_id: u64,
    /// Destination chain ID. Default: 42161 (Arbitrum).
    #[serde(default = "default_dst_chain_id")]
    pub dst_chain_id: u64,
    /// Token to sell on the source chain. Default: USDC on Base.
    #[serde(default = "default_src_token")]
    pub src_token_address: String,
    /// Token to buy on the destination chain. Default: USDC on Arbitrum.
    #[serde(default = "default_dst_token")]
    pub dst_token_address: String,
    /// Amount to swap. Values below 1000000 are read as whole 6-decimal tokens.
    #[serde(default = "default_amount")]
    pub amount: String,
    /// Swap in the reverse direction. Default: false.
    #[serde(default)]
    pub invert: bool,
}

impl Default for SwapInput {
    fn default() -> Self {
        Self {
            src_chain_id: default_src_chain_id(),
            dst_chain_id: default_dst_chain_id(),
            src_token_address: default_src_token(),
            dst_token_address: default_dst_token(),
            amount: default_amount(),
            invert: false,
        }
    }
}

impl From<SwapInput> for SwapRequest {
    fn from(input: SwapInput) -> Self {
        Self {
            src_chain_id: input.src_chain_id,
            dst_chain_id: input.dst_chain_id,
            src_token_address: input.src_token_address,
            dst_token_address: input.dst_token_address,
            amount: input.amount,
            invert: input.invert,
        }
    }
}

/// Input parameters for portfolio-protocols-value and portfolio-general-value.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValueInput {
    /// Chain ID to query. Default: 1 (Ethereum).
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    /// Comma-separated wallet addresses.
    #[serde(default)]
    pub addresses: Option<String>,
    /// Serve cached data when available. Default: false.
    #[serde(default, rename = "use_cache")]
    pub use_cache: bool,
}

impl From<PortfolioValueInput> for PortfolioQuery {
    fn from(input: PortfolioValueInput) -> Self {
        PortfolioQuery::new(input.chain_id, input.addresses, input.use_cache)
    }
}

/// Input parameters for portfolio-tokens-details.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokensDetailsInput {
    /// Chain ID to query. Default: 1 (Ethereum).
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    /// Comma-separated wallet addresses.
    #[serde(default)]
    pub addresses: Option<String>,
    /// Time window: 1day, 1week, 1month, 1year or 3years. Default: 1day.
    #[serde(default)]
    pub timerange: TimeRange,
    /// Include closed positions. Default: true.
    #[serde(default = "default_true")]
    pub closed: bool,
    /// Threshold for treating a position as closed. Default: 1.
    #[serde(default = "default_closed_threshold", rename = "closed_threshold")]
    pub closed_threshold: f64,
    /// Serve cached data when available. Default: false.
    #[serde(default, rename = "use_cache")]
    pub use_cache: bool,
}

impl From<TokensDetailsInput> for PortfolioQuery {
    fn from(input: TokensDetailsInput) -> Self {
        Self {
            chain_id: input.chain_id,
            addresses: input.addresses,
            timerange: Some(input.timerange),
            closed: Some(input.closed),
            closed_threshold: Some(input.closed_threshold),
            use_cache: input.use_cache,
        }
    }
}

/// Input parameters for portfolio-value-chart.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValueChartInput {
    /// Chain ID to query. Default: 1 (Ethereum).
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    /// Comma-separated wallet addresses.
    #[serde(default)]
    pub addresses: Option<String>,
    /// Time window: 1day, 1week, 1month, 1year or 3years. Default: 1month.
    #[serde(default = "default_chart_timerange")]
    pub timerange: TimeRange,
    /// Serve cached data when available. Default: false.
    #[serde(default, rename = "use_cache")]
    pub use_cache: bool,
}

impl From<ValueChartInput> for PortfolioQuery {
    fn from(input: ValueChartInput) -> Self {
        Self {
            timerange: Some(input.timerange),
            ..PortfolioQuery::new(input.chain_id, input.addresses, input.use_cache)
        }
    }
}

/// Input parameters for the swap-status tool.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwapStatusInput {
    /// Order hash to look up. Lists every order when omitted.
    #[serde(default)]
    pub order_hash: Option<String>,
}
