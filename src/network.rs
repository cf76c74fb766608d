//! Network URL constants for the OpenSea API.

/// Mainnet REST API base URL.
pub const MAINNET_API_URL: &str = "https://api.opensea.io";

/// Testnet REST API base URL.
pub const TESTNET_API_URL: &str = "https://testnets-api.opensea.io";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";
