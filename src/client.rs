//! High-level client: `OpenSeaClient` with nested sub-client accessors.

use crate::domain::order::client::Orders;
use crate::error::SdkError;
use crate::http::OpenSeaHttp;
use crate::shared::Chain;

use std::time::Duration;

pub use crate::domain::order::client::Orders as OrdersClient;

/// The primary entry point for the order API.
///
/// Bound to a single chain; `client.orders()` exposes the order endpoints.
pub struct OpenSeaClient {
    pub(crate) http: OpenSeaHttp,
    pub(crate) chain: Chain,
}

impl OpenSeaClient {
    pub fn builder() -> OpenSeaClientBuilder {
        OpenSeaClientBuilder::default()
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

impl Clone for OpenSeaClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            chain: self.chain,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct OpenSeaClientBuilder {
    chain: Chain,
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl Default for OpenSeaClientBuilder {
    fn default() -> Self {
        Self {
            chain: Chain::default(),
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl OpenSeaClientBuilder {
    pub fn chain(mut self, chain: Chain) -> Self {
        self.chain = chain;
        self
    }

    /// Override the API host. Defaults to the chain's mainnet/testnet host.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<OpenSeaClient, SdkError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| self.chain.api_base_url().to_string());
        Ok(OpenSeaClient {
            http: OpenSeaHttp::new(&base_url, self.api_key, self.timeout)?,
            chain: self.chain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_mainnet_host() {
        let client = OpenSeaClient::builder().build().unwrap();
        assert_eq!(client.chain(), Chain::Mainnet);
        assert_eq!(client.base_url(), "https://api.opensea.io");
    }

    #[test]
    fn test_builder_testnet_host() {
        let client = OpenSeaClient::builder().chain(Chain::Goerli).build().unwrap();
        assert_eq!(client.base_url(), "https://testnets-api.opensea.io");
    }

    #[test]
    fn test_builder_base_url_override() {
        let client = OpenSeaClient::builder()
            .base_url("http://localhost:8080/")
            .api_key("key")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
