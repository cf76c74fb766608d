//! Wire types for order API requests and responses.

use super::protocol::{ConsiderationItem, ProtocolData};
use super::OrderType;
use crate::domain::account::wire::AccountResponse;
use crate::domain::asset::wire::AssetBundleResponse;
use crate::shared::{serde_util, Side};
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

// ─── Orders ──────────────────────────────────────────────────────────────────

/// Fee line item as sent by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializedOrderFee {
    pub account: AccountResponse,
    pub basis_points: String,
}

/// Order record as sent by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializedOrder {
    pub created_date: String,
    pub closing_date: Option<String>,
    pub listing_time: i64,
    pub expiration_time: i64,
    pub order_hash: Option<String>,
    pub maker: AccountResponse,
    pub taker: Option<AccountResponse>,
    pub protocol_data: ProtocolData,
    pub protocol_address: String,
    pub current_price: String,
    pub maker_fees: Vec<SerializedOrderFee>,
    pub taker_fees: Vec<SerializedOrderFee>,
    pub side: Side,
    pub order_type: OrderType,
    pub cancelled: bool,
    pub finalized: bool,
    pub marked_invalid: bool,
    pub client_signature: Option<String>,
    pub maker_asset_bundle: AssetBundleResponse,
    pub taker_asset_bundle: AssetBundleResponse,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryCursors {
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// Response of `GET /v2/orders/{chain}/{protocol}/{side}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrdersQueryResponse {
    pub next: Option<String>,
    pub previous: Option<String>,
    pub orders: Vec<SerializedOrder>,
}

impl OrdersQueryResponse {
    pub fn cursors(&self) -> QueryCursors {
        QueryCursors {
            next: self.next.clone(),
            previous: self.previous.clone(),
        }
    }
}

/// Response of `POST /v2/orders/{chain}/{protocol}/{side}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrdersPostQueryResponse {
    pub order: SerializedOrder,
}

// ─── Fulfillment ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FulfillmentDataResponse {
    pub protocol: String,
    pub fulfillment_data: FulfillmentData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FulfillmentData {
    pub transaction: Transaction,
    pub orders: Vec<ProtocolData>,
}

/// Transaction parameters for executing a matched order on-chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub function: String,
    pub chain: u64,
    pub to: String,
    #[serde(with = "serde_util::u256_string")]
    pub value: U256,
    pub input_data: serde_json::Value,
}

// ─── Offers ──────────────────────────────────────────────────────────────────

/// Response of `POST /v2/offers/build`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildOfferResponse {
    #[serde(rename = "partialParameters")]
    pub partial_parameters: PartialParameters,
}

/// Consideration and zone the API requires on a collection offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartialParameters {
    pub consideration: Vec<ConsiderationItem>,
    pub zone: String,
    pub zone_hash: String,
}

/// Response of `POST /v2/offers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostOfferResponse {
    pub order_hash: String,
    pub chain: String,
    pub criteria: Criteria,
    pub protocol_data: ProtocolData,
    pub protocol_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Criteria {
    pub collection: CollectionCriteria,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<ContractCriteria>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionCriteria {
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContractCriteria {
    pub address: String,
}

// ─── Collections ─────────────────────────────────────────────────────────────

/// Response of `GET /api/v1/collection/{slug}`. The collection body is passed through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetCollectionResponse {
    pub collection: serde_json::Value,
}
