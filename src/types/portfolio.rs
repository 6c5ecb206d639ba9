//! Portfolio API query types.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Time window accepted by the portfolio endpoints.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema, Default,
)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "1day")]
    OneDay,
    #[serde(rename = "1week")]
    OneWeek,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "3years")]
    ThreeYears,
}

impl TimeRange {
    /// Wire value used in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::OneDay => "1day",
            TimeRange::OneWeek => "1week",
            TimeRange::OneMonth => "1month",
            TimeRange::OneYear => "1year",
            TimeRange::ThreeYears => "3years",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved portfolio query.
///
/// `chain_id` is sent separately by the client; the remaining fields become
/// extra query parameters, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioQuery {
    /// Chain to query.
    pub chain_id: u64,
    /// Comma-delimited wallet addresses.
    pub addresses: Option<String>,
    /// Time window (token details and value chart only).
    pub timerange: Option<TimeRange>,
    /// Include closed positions (token details only).
    pub closed: Option<bool>,
    /// Threshold for closed positions (token details only).
    pub closed_threshold: Option<f64>,
    /// Ask the API to serve cached data.
    pub use_cache: bool,
}

impl PortfolioQuery {
    /// Query with only the fields every portfolio endpoint shares.
    pub fn new(chain_id: u64, addresses: Option<String>, use_cache: bool) -> Self {
        Self { chain_id, addresses, timerange: None, closed: None, closed_threshold: None, use_cache }
    }

    /// String-encode the endpoint-specific fields.
    ///
    /// Absent optional fields are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(addresses) = self.addresses.as_deref().map(str::trim) {
            if !addresses.is_empty() {
                pairs.push(("addresses", addresses.to_string()));
            }
        }
        if let Some(timerange) = self.timerange {
            pairs.push(("timerange", timerange.to_string()));
        }
        if let Some(closed) = self.closed {
            pairs.push(("closed", closed.to_string()));
        }
        if let Some(threshold) = self.closed_threshold {
            pairs.push(("closed_threshold", threshold.to_string()));
        }
        pairs.push(("use_cache", self.use_cache.to_string()));
        pairs
    }
}
