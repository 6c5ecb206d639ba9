//! Order status lookups against the executor's status file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{
    error::{AppError, Result},
    types::{OrderStatusStore, StoreSnapshot},
};

/// Returned when the status file has not been created yet.
pub const NO_SWAP_ORDERS: &str = "No swap orders found.";

/// Returned when the status file holds no orders.
pub const NO_ORDERS: &str = "No orders found.";

/// Read-only view of the order status file.
///
/// The file belongs to the swap executor. It is never created, locked or
/// written from here.
#[derive(Debug, Clone)]
pub struct OrderStatusReader {
    path: PathBuf,
}

impl OrderStatusReader {
    /// Create a reader for the given status file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the status file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the status file.
    pub async fn load(&self) -> StoreSnapshot {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return StoreSnapshot::Empty,
            Err(e) => return StoreSnapshot::Malformed(e.to_string()),
        };

        match serde_json::from_str::<OrderStatusStore>(&contents) {
            Ok(store) => StoreSnapshot::Parsed(store),
            Err(e) => StoreSnapshot::Malformed(e.to_string()),
        }
    }

    /// Describe one order, or all of them when `order_hash` is absent or blank.
    ///
    /// # Errors
    /// Returns [`AppError::Parse`] when the status file is malformed.
    pub async fn read_status(&self, order_hash: Option<&str>) -> Result<String> {
        let store = match self.load().await {
            StoreSnapshot::Empty => return Ok(NO_SWAP_ORDERS.to_string()),
            StoreSnapshot::Parsed(store) => store,
            StoreSnapshot::Malformed(reason) => {
                tracing::warn!(path = %self.path.display(), reason = %reason, "Malformed order status file");
                return Err(AppError::Parse(reason));
            }
        };

        match order_hash.map(str::trim).filter(|hash| !hash.is_empty()) {
            None => Ok(describe_all(&store)),
            Some(hash) => Ok(match store.find(hash) {
                Some(order) => order.describe(),
                None => format!("Order {} not found.", hash),
            }),
        }
    }
}

fn describe_all(store: &OrderStatusStore) -> String {
    if store.orders.is_empty() {
        return NO_ORDERS.to_string();
    }
    store.orders.iter().map(|order| order.describe()).collect::<Vec<_>>().join("\n\n")
}
