//! Shared JSON fixtures shaped like real order API responses.

#![allow(dead_code)]

use opensea_orders::prelude::DEFAULT_SEAPORT_CONTRACT_ADDRESS;
use serde_json::json;

pub fn protocol_data_json() -> serde_json::Value {
    json!({
        "parameters": {
            "offerer": "0x1111111111111111111111111111111111111111",
            "zone": "0x004c00500000ad104d7dbd00e3ae0a5c00560c00",
            "offer": [{
                "itemType": 1,
                "token": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
                "identifierOrCriteria": "0",
                "startAmount": "500000000000000000",
                "endAmount": "500000000000000000"
            }],
            "consideration": [{
                "itemType": 4,
                "token": "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d",
                "identifierOrCriteria": "0",
                "startAmount": "1",
                "endAmount": "1",
                "recipient": "0x1111111111111111111111111111111111111111"
            }],
            "orderType": 2,
            "startTime": "1690000000",
            "endTime": "1690086400",
            "zoneHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "salt": "0x360c6ebe0000000000000000000000000000000000000000a1b2c3d4e5f60718",
            "conduitKey": "0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000",
            "totalOriginalConsiderationItems": 1,
            "counter": "0"
        },
        "signature": null
    })
}

pub fn order_json(side: &str, taker: serde_json::Value) -> serde_json::Value {
    json!({
        "created_date": "2023-07-22T04:26:40.000000",
        "closing_date": null,
        "listing_time": 1690000000,
        "expiration_time": 1690086400,
        "order_hash": "0xabcdef",
        "maker": {
            "address": "0x1111111111111111111111111111111111111111",
            "config": "",
            "profile_img_url": "https://storage.googleapis.com/opensea-static/opensea-profile/1.png",
            "user": null
        },
        "taker": taker,
        "protocol_data": protocol_data_json(),
        "protocol_address": DEFAULT_SEAPORT_CONTRACT_ADDRESS,
        "current_price": "500000000000000000",
        "maker_fees": [
            { "account": { "address": "0x0000a26b00c1f0df003000390027140000faa719" }, "basis_points": "250" }
        ],
        "taker_fees": [],
        "side": side,
        "order_type": "criteria",
        "cancelled": false,
        "finalized": false,
        "marked_invalid": false,
        "client_signature": null,
        "maker_asset_bundle": { "assets": [] },
        "taker_asset_bundle": {
            "assets": [{
                "token_id": null,
                "asset_contract": { "address": "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d", "schema_name": "ERC721" }
            }],
            "slug": "boredapeyachtclub"
        }
    })
}
