//! Shared enums and utilities used across all domain modules.
//!
//! These types serialize to the exact tags the API sends, so they can be used
//! directly in wire types without conversion.

pub mod serde_util;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

// ─── Chain ───────────────────────────────────────────────────────────────────

/// Chains the order API is routed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    #[default]
    #[serde(rename = "main")]
    Mainnet,
    #[serde(rename = "goerli")]
    Goerli,
}

impl Chain {
    /// Chain segment used in API paths and fulfillment payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Chain::Mainnet => "ethereum",
            Chain::Goerli => "goerli",
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Chain::Goerli)
    }

    /// REST API host serving this chain.
    pub fn api_base_url(&self) -> &'static str {
        if self.is_testnet() {
            crate::network::TESTNET_API_URL
        } else {
            crate::network::MAINNET_API_URL
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returned when a chain identifier has no known route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown chain: {0}")]
pub struct UnknownChain(pub String);

impl FromStr for Chain {
    type Err = UnknownChain;

    /// Accepts both the enum tag (`main`) and the API path name (`ethereum`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" | "ethereum" => Ok(Chain::Mainnet),
            "goerli" => Ok(Chain::Goerli),
            other => Err(UnknownChain(other.to_string())),
        }
    }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Order side: Ask (listing) or Bid (offer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Ask,
    Bid,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Ask => "ask",
            Side::Bid => "bid",
        }
    }

    /// Route segment: asks live under `listings`, bids under `offers`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Side::Ask => "listings",
            Side::Bid => "offers",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── OrderProtocol ───────────────────────────────────────────────────────────

/// Order protocol the API stores orders under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderProtocol {
    #[default]
    Seaport,
}

impl OrderProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderProtocol::Seaport => "seaport",
        }
    }
}

impl std::fmt::Display for OrderProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_names() {
        assert_eq!(Chain::Mainnet.name(), "ethereum");
        assert_eq!(Chain::Goerli.name(), "goerli");
        assert_eq!(Chain::Mainnet.to_string(), "ethereum");
    }

    #[test]
    fn test_chain_from_str() {
        assert_eq!("main".parse::<Chain>().unwrap(), Chain::Mainnet);
        assert_eq!("ethereum".parse::<Chain>().unwrap(), Chain::Mainnet);
        assert_eq!("goerli".parse::<Chain>().unwrap(), Chain::Goerli);
        let err = "sepolia".parse::<Chain>().unwrap_err();
        assert_eq!(err, UnknownChain("sepolia".to_string()));
    }

    #[test]
    fn test_chain_serde() {
        let json = serde_json::to_string(&Chain::Mainnet).unwrap();
        assert_eq!(json, "\"main\"");
        let back: Chain = serde_json::from_str("\"goerli\"").unwrap();
        assert_eq!(back, Chain::Goerli);
    }

    #[test]
    fn test_chain_base_url() {
        assert_eq!(Chain::Mainnet.api_base_url(), "https://api.opensea.io");
        assert_eq!(
            Chain::Goerli.api_base_url(),
            "https://testnets-api.opensea.io"
        );
    }

    #[test]
    fn test_side_serde() {
        let ask: Side = serde_json::from_str("\"ask\"").unwrap();
        assert_eq!(ask, Side::Ask);
        let bid: Side = serde_json::from_str("\"bid\"").unwrap();
        assert_eq!(bid, Side::Bid);
        assert_eq!(Side::Ask.path_segment(), "listings");
        assert_eq!(Side::Bid.path_segment(), "offers");
    }

    #[test]
    fn test_protocol_serde() {
        let json = serde_json::to_string(&OrderProtocol::Seaport).unwrap();
        assert_eq!(json, "\"seaport\"");
    }
}
