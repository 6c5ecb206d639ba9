//! Swap-related types.

use serde::{Deserialize, Serialize};

/// Parameters handed to the cross-chain swap executor.
///
/// Serialized in camelCase, which is the shape the executor expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    /// Source chain ID.
    pub src_chain_id: u64,
    /// Destination chain ID.
    pub dst_chain_id: u64,
    /// Token sold on the source chain.
    pub src_token_address: String,
    /// Token bought on the destination chain.
    pub dst_token_address: String,
    /// Amount in the token's smallest unit, string-encoded.
    pub amount: String,
    /// Swap in the reverse direction.
    pub invert: bool,
}

/// What the executor reports back after submitting an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapExecution {
    /// Hash of the submitted order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_hash: Option<String>,
    /// Free-form progress message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure reason, set when the order could not be placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of dispatching a swap, rendered as tool text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The executor accepted the order.
    Initiated { order_hash: String, message: String },
    /// The executor returned a failure indicator.
    Failed(String),
    /// The executor raised an error.
    Errored(String),
}

impl SwapOutcome {
    /// Human-readable text for the MCP client.
    pub fn text(&self) -> String {
        match self {
            SwapOutcome::Initiated { order_hash, message } => {
                format!("Swap initiated successfully! Order hash: {order_hash}\n{message}")
            }
            SwapOutcome::Failed(reason) => format!("Swap failed: {reason}"),
            SwapOutcome::Errored(reason) => format!("Error: {reason}"),
        }
    }

    /// Whether the outcome should be flagged as an error.
    pub fn is_error(&self) -> bool {
        !matches!(self, SwapOutcome::Initiated { .. })
    }
}
