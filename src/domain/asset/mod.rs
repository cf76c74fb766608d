//! Asset domain: NFT assets and the bundles orders trade.

mod convert;
pub mod wire;

use crate::domain::account::Account;
use serde::{Deserialize, Serialize};

// ─── AssetContract ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetContract {
    pub address: String,
    pub name: Option<String>,
    pub schema_name: Option<String>,
    pub token_symbol: Option<String>,
}

// ─── Asset ───────────────────────────────────────────────────────────────────

/// A single token inside a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// `None` for fungible or criteria items.
    pub token_id: Option<String>,
    pub token_address: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub permalink: Option<String>,
    pub asset_contract: Option<AssetContract>,
    pub decimals: Option<u8>,
}

// ─── AssetBundle ─────────────────────────────────────────────────────────────

/// The group of assets on one side of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBundle {
    pub maker: Option<Account>,
    pub assets: Vec<Asset>,
    pub asset_contract: Option<AssetContract>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    pub permalink: Option<String>,
}

/// Build an [`AssetBundle`] from raw API JSON.
pub fn asset_bundle_from_json(
    raw: serde_json::Value,
) -> Result<AssetBundle, serde_json::Error> {
    let wire: wire::AssetBundleResponse = serde_json::from_value(raw)?;
    Ok(wire.into())
}
