//! Swap dispatch service.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    services::SwapExecutor,
    types::{SwapOutcome, SwapRequest},
};

/// Amounts below this are treated as whole tokens and scaled up.
const SCALE_THRESHOLD: i64 = 1_000_000;

/// Scale factor applied to small amounts (6-decimal tokens).
const SCALE_FACTOR: i64 = 1_000_000;

/// Convert a human-scale amount into base units.
///
/// Numeric values below one million are multiplied by one million; anything
/// else, including non-numeric input, is returned unchanged.
pub fn normalize_amount(amount: &str) -> String {
    let trimmed = amount.trim();
    if !is_numeric_literal(trimmed) {
        return amount.to_string();
    }
    let parsed = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed));

    match parsed {
        Ok(value) if value < Decimal::from(SCALE_THRESHOLD) => {
            match value.checked_mul(Decimal::from(SCALE_FACTOR)) {
                Some(scaled) => scaled.normalize().to_string(),
                None => amount.to_string(),
            }
        }
        _ => amount.to_string(),
    }
}

/// Plain decimal or scientific notation only. `Decimal` also accepts `_`
/// digit separators, which are not numbers here.
fn is_numeric_literal(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
}

/// Service that forwards swaps to the executor.
#[derive(Clone)]
pub struct SwapDispatcher {
    executor: Arc<dyn SwapExecutor>,
}

impl SwapDispatcher {
    /// Create a new swap dispatcher.
    pub fn new(executor: Arc<dyn SwapExecutor>) -> Self {
        Self { executor }
    }

    /// Normalize the amount and submit the swap.
    ///
    /// Never fails: executor errors become [`SwapOutcome::Errored`].
    pub async fn dispatch(&self, mut request: SwapRequest) -> SwapOutcome {
        request.amount = normalize_amount(&request.amount);

        tracing::info!(
            src_chain = request.src_chain_id,
            dst_chain = request.dst_chain_id,
            amount = %request.amount,
            invert = request.invert,
            "Dispatching cross-chain swap"
        );

        match self.executor.execute(&request).await {
            Ok(Some(execution)) => match (execution.error, execution.order_hash) {
                (Some(error), _) => SwapOutcome::Failed(error),
                (None, Some(order_hash)) => {
                    tracing::info!(order_hash = %order_hash, "Swap order submitted");
                    SwapOutcome::Initiated {
                        order_hash,
                        message: execution.message.unwrap_or_default(),
                    }
                }
                (None, None) => {
                    SwapOutcome::Failed("executor returned no order hash".to_string())
                }
            },
            Ok(None) => SwapOutcome::Failed("executor returned no result".to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "Swap executor failed");
                SwapOutcome::Errored(e.to_string())
            }
        }
    }
}
