//! 1inch Portfolio API client.

use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Url,
};
use serde_json::Value;

use crate::{
    config::Config,
    error::{AppError, Result},
    types::PortfolioQuery,
};

/// Portfolio API endpoint paths, relative to the base URL.
pub mod endpoints {
    /// Current value of positions, grouped by protocol.
    pub const PROTOCOLS_CURRENT_VALUE: &str = "/overview/protocols/current_value";
    /// ERC20 token details with profit and loss.
    pub const ERC20_DETAILS: &str = "/overview/erc20/details";
    /// Total current value of the wallets.
    pub const GENERAL_CURRENT_VALUE: &str = "/general/current_value";
    /// Historical value chart.
    pub const GENERAL_VALUE_CHART: &str = "/general/value_chart";
}

/// Client for the 1inch Portfolio API.
///
/// Each call is a single authenticated GET. There are no retries and no
/// timeout.
#[derive(Clone)]
pub struct PortfolioClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PortfolioClient {
    /// Create a new portfolio client from configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.portfolio_api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Build the request URL.
    ///
    /// `chain_id` always comes first, followed by `extra` in the given order.
    pub fn build_url(&self, endpoint: &str, chain_id: u64, extra: &[(&str, String)]) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, endpoint);
        let mut url = Url::parse(&raw)
            .map_err(|e| AppError::Config(format!("Invalid portfolio URL '{}': {}", raw, e)))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("chain_id", &chain_id.to_string());
            for (key, value) in extra {
                query.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// GET `endpoint` and parse the body as JSON.
    pub async fn fetch(
        &self,
        endpoint: &str,
        chain_id: u64,
        extra: &[(&str, String)],
    ) -> Result<Value> {
        let url = self.build_url(endpoint, chain_id, extra)?;
        tracing::debug!(url = %url, "Requesting portfolio API");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(status = status.as_u16(), endpoint, "Portfolio API returned an error");
            return Err(AppError::Api { status: status.as_u16(), body });
        }

        serde_json::from_slice(&body)
            .map_err(|e| AppError::Parse(format!("invalid JSON in response body: {}", e)))
    }

    /// Fetch a portfolio endpoint for a resolved query.
    pub async fn query(&self, endpoint: &str, query: &PortfolioQuery) -> Result<Value> {
        self.fetch(endpoint, query.chain_id, &query.query_pairs()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimeRange;

    fn client() -> PortfolioClient {
        PortfolioClient::new(&Config::new("test-key")).expect("client")
    }

    #[test]
    fn test_build_url_appends_chain_id_first() {
        let url = client()
            .build_url(endpoints::GENERAL_CURRENT_VALUE, 1, &[("use_cache", "false".to_string())])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.1inch.dev/portfolio/portfolio/v4/general/current_value?chain_id=1&use_cache=false"
        );
    }

    #[test]
    fn test_build_url_keeps_extra_param_order() {
        let query = PortfolioQuery {
            chain_id: 137,
            addresses: Some("0xabc".to_string()),
            timerange: Some(TimeRange::OneMonth),
            closed: None,
            closed_threshold: None,
            use_cache: true,
        };
        let url = client()
            .build_url(endpoints::GENERAL_VALUE_CHART, query.chain_id, &query.query_pairs())
            .unwrap();

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("chain_id".to_string(), "137".to_string()),
                ("addresses".to_string(), "0xabc".to_string()),
                ("timerange".to_string(), "1month".to_string()),
                ("use_cache".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_url_rejects_invalid_base() {
        let mut config = Config::new("test-key");
        config.portfolio_api_url = "not a url".to_string();
        let client = PortfolioClient::new(&config).unwrap();

        let err = client.build_url(endpoints::ERC20_DETAILS, 1, &[]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
