//! Wire types for assets and asset bundles.

use crate::domain::account::wire::AccountResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetContractResponse {
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub schema_name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetResponse {
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub asset_contract: Option<AssetContractResponse>,
    #[serde(default)]
    pub decimals: Option<u8>,
}

/// Raw bundle as embedded in `maker_asset_bundle` / `taker_asset_bundle`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetBundleResponse {
    #[serde(default)]
    pub maker: Option<AccountResponse>,
    #[serde(default)]
    pub assets: Option<Vec<AssetResponse>>,
    #[serde(default)]
    pub asset_contract: Option<AssetContractResponse>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_link: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
}
