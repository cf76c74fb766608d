//! Order domain: listings, offers, and the request builders around them.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod paths;
pub mod payload;
pub mod protocol;
pub mod query;
pub mod wire;

use crate::domain::account::Account;
use crate::domain::asset::AssetBundle;
use crate::shared::{serde_util, Side};
use alloy_primitives::U256;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub use paths::{
    get_build_offer_path, get_collection_path, get_fulfillment_data_path, get_orders_api_path,
    get_post_collection_offer_path,
};
pub use payload::{
    get_build_collection_offer_payload, get_fulfill_listing_payload, get_fulfill_offer_payload,
    get_post_collection_offer_payload, get_post_order_payload, DEFAULT_SEAPORT_CONTRACT_ADDRESS,
};
pub use protocol::ProtocolData;
pub use query::{serialize_orders_query_options, OrderApiOptions, OrdersQueryOptions};

// ─── OrderType ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Basic,
    Dutch,
    English,
    /// Offer on any token of a collection or contract.
    Criteria,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderType::Basic => write!(f, "basic"),
            OrderType::Dutch => write!(f, "dutch"),
            OrderType::English => write!(f, "english"),
            OrderType::Criteria => write!(f, "criteria"),
        }
    }
}

// ─── OrderFee ────────────────────────────────────────────────────────────────

/// A fee line item on one side of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFee {
    pub account: Account,
    /// Fixed-point basis points, kept as the string the API sent.
    pub basis_points: String,
}

impl OrderFee {
    /// The fee as a percentage (`250` bps → `2.5`).
    pub fn percentage(&self) -> Result<Decimal, ValidationError> {
        let bps = Decimal::from_str(&self.basis_points)
            .map_err(|_| ValidationError::InvalidBasisPoints(self.basis_points.clone()))?;
        Ok(bps / Decimal::ONE_HUNDRED)
    }
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A listing or offer as returned by the order API.
///
/// Read-only once fetched: there is no conversion back to the wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub created_date: String,
    pub closing_date: Option<String>,
    pub listing_time: i64,
    pub expiration_time: i64,
    /// `None` until the order hash has been assigned.
    pub order_hash: Option<String>,
    pub maker: Account,
    pub taker: Option<Account>,
    pub protocol_data: ProtocolData,
    pub protocol_address: String,
    #[serde(with = "serde_util::u256_string")]
    pub current_price: U256,
    pub maker_fees: Vec<OrderFee>,
    pub taker_fees: Vec<OrderFee>,
    pub side: Side,
    pub order_type: OrderType,
    pub cancelled: bool,
    pub finalized: bool,
    pub marked_invalid: bool,
    pub client_signature: Option<String>,
    pub maker_asset_bundle: AssetBundle,
    pub taker_asset_bundle: AssetBundle,
}

impl Order {
    /// True when the order is neither cancelled, finalized nor marked invalid.
    pub fn is_active(&self) -> bool {
        !(self.cancelled || self.finalized || self.marked_invalid)
    }

    pub fn listing_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.listing_time, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.expiration_time, 0)
    }
}

/// Deserialize a wire order into its domain form.
pub fn deserialize_order(order: wire::SerializedOrder) -> Result<Order, ValidationError> {
    Order::try_from(order)
}

// ─── OrdersPage ──────────────────────────────────────────────────────────────

/// One page of an orders query with its pagination cursors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    pub next: Option<String>,
    pub previous: Option<String>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid current price: {0}")]
    InvalidPrice(String),
    #[error("Invalid basis points: {0}")]
    InvalidBasisPoints(String),
}
