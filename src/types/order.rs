//! Order status store types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display format for order timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// An instant as written by the swap executor.
///
/// The executor records epoch milliseconds; date strings are accepted too.
/// Any other JSON value is kept so one odd order cannot hide the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// RFC 3339 (or otherwise free-form) date string.
    Text(String),
    /// Fractional milliseconds, `null` or anything else.
    Other(serde_json::Value),
}

impl Timestamp {
    /// Human-readable rendering. Unparseable values are shown as-is.
    pub fn display(&self) -> String {
        match self {
            Timestamp::Millis(ms) => format_millis(*ms).unwrap_or_else(|| ms.to_string()),
            Timestamp::Text(text) => match DateTime::parse_from_rfc3339(text) {
                Ok(dt) => dt.with_timezone(&Utc).format(TIMESTAMP_FORMAT).to_string(),
                Err(_) => text.clone(),
            },
            Timestamp::Other(value) => value
                .as_f64()
                .and_then(|ms| format_millis(ms.trunc() as i64))
                .unwrap_or_else(|| value.to_string()),
        }
    }
}

fn format_millis(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}

/// A single cross-chain order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order hash.
    pub order_hash: String,
    /// Lifecycle status reported by the executor.
    pub status: String,
    /// When the order was submitted.
    pub start_time: Timestamp,
    /// When the status last changed.
    pub last_updated: Timestamp,
}

impl Order {
    /// Multi-line status block for this order.
    pub fn describe(&self) -> String {
        format!(
            "Order: {}\nStatus: {}\nStart Time: {}\nLast Updated: {}",
            self.order_hash,
            self.status,
            self.start_time.display(),
            self.last_updated.display()
        )
    }
}

/// Contents of the order status file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusStore {
    /// Orders in insertion order.
    pub orders: Vec<Order>,
}

impl OrderStatusStore {
    /// Find an order by exact hash.
    pub fn find(&self, order_hash: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.order_hash == order_hash)
    }
}

/// Outcome of reading the order status file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSnapshot {
    /// The file does not exist yet.
    Empty,
    /// The file was read and parsed.
    Parsed(OrderStatusStore),
    /// The file exists but could not be read or parsed.
    Malformed(String),
}
