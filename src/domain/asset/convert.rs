//! Conversions: asset wire types → asset domain types.

use super::wire;
use super::{Asset, AssetBundle, AssetContract};

impl From<wire::AssetContractResponse> for AssetContract {
    fn from(source: wire::AssetContractResponse) -> Self {
        AssetContract {
            address: source.address,
            name: source.name,
            schema_name: source.schema_name,
            token_symbol: source.symbol,
        }
    }
}

impl From<wire::AssetResponse> for Asset {
    fn from(source: wire::AssetResponse) -> Self {
        // Older payloads only carry the address inside `asset_contract`.
        let token_address = source
            .token_address
            .or_else(|| source.asset_contract.as_ref().map(|c| c.address.clone()));
        Asset {
            token_id: source.token_id,
            token_address,
            name: source.name,
            description: source.description,
            image_url: source.image_url,
            permalink: source.permalink,
            asset_contract: source.asset_contract.map(Into::into),
            decimals: source.decimals,
        }
    }
}

impl From<wire::AssetBundleResponse> for AssetBundle {
    fn from(source: wire::AssetBundleResponse) -> Self {
        AssetBundle {
            maker: source.maker.map(Into::into),
            assets: source
                .assets
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            asset_contract: source.asset_contract.map(Into::into),
            name: source.name,
            slug: source.slug,
            description: source.description,
            external_link: source.external_link,
            permalink: source.permalink,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::asset_bundle_from_json;
    use serde_json::json;

    #[test]
    fn test_bundle_from_json() {
        let bundle = asset_bundle_from_json(json!({
            "maker": { "address": "0xmaker" },
            "assets": [{
                "token_id": "42",
                "name": "Punk #42",
                "asset_contract": {
                    "address": "0xcontract",
                    "schema_name": "ERC721",
                    "symbol": "PUNK"
                }
            }],
            "slug": "punks",
            "name": null
        }))
        .unwrap();

        assert_eq!(bundle.maker.unwrap().address, "0xmaker");
        assert_eq!(bundle.assets.len(), 1);
        let asset = &bundle.assets[0];
        assert_eq!(asset.token_id.as_deref(), Some("42"));
        assert_eq!(asset.token_address.as_deref(), Some("0xcontract"));
        let contract = asset.asset_contract.as_ref().unwrap();
        assert_eq!(contract.schema_name.as_deref(), Some("ERC721"));
        assert_eq!(contract.token_symbol.as_deref(), Some("PUNK"));
        assert_eq!(bundle.slug.as_deref(), Some("punks"));
        assert!(bundle.name.is_none());
    }

    #[test]
    fn test_bundle_without_assets_is_empty() {
        let bundle = asset_bundle_from_json(json!({})).unwrap();
        assert!(bundle.assets.is_empty());
        assert!(bundle.maker.is_none());
    }

    #[test]
    fn test_bundle_with_malformed_maker_fails() {
        assert!(asset_bundle_from_json(json!({ "maker": { "config": "" } })).is_err());
    }
}
