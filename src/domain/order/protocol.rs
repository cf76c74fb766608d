//! Seaport protocol data carried by every order.
//!
//! Field names follow the Seaport order struct (camelCase) since the API
//! embeds it untouched under `protocol_data`.

use crate::shared::serde_util;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Protocol-specific payload of an order. Only Seaport is routed today.
pub type ProtocolData = OrderWithCounter;

/// A Seaport order: components plus the maker's signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderWithCounter {
    pub parameters: OrderComponents,
    /// Absent on unsigned orders.
    #[serde(default)]
    pub signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderComponents {
    pub offerer: String,
    pub zone: String,
    pub offer: Vec<OfferItem>,
    pub consideration: Vec<ConsiderationItem>,
    pub order_type: u8,
    #[serde(with = "serde_util::string_or_number")]
    pub start_time: String,
    #[serde(with = "serde_util::string_or_number")]
    pub end_time: String,
    pub zone_hash: String,
    #[serde(with = "serde_util::string_or_number")]
    pub salt: String,
    pub conduit_key: String,
    pub total_original_consideration_items: u32,
    #[serde(with = "serde_util::string_or_number")]
    pub counter: String,
}

/// Item type tags as numbered by the Seaport contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ItemType {
    Native = 0,
    Erc20 = 1,
    Erc721 = 2,
    Erc1155 = 3,
    Erc721WithCriteria = 4,
    Erc1155WithCriteria = 5,
}

impl ItemType {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Native),
            1 => Some(Self::Erc20),
            2 => Some(Self::Erc721),
            3 => Some(Self::Erc1155),
            4 => Some(Self::Erc721WithCriteria),
            5 => Some(Self::Erc1155WithCriteria),
            _ => None,
        }
    }

    pub fn is_criteria(&self) -> bool {
        matches!(self, Self::Erc721WithCriteria | Self::Erc1155WithCriteria)
    }
}

impl Serialize for ItemType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for ItemType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        Self::from_u8(raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown item type: {raw}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferItem {
    pub item_type: ItemType,
    pub token: String,
    #[serde(with = "serde_util::string_or_number")]
    pub identifier_or_criteria: String,
    #[serde(with = "serde_util::string_or_number")]
    pub start_amount: String,
    #[serde(with = "serde_util::string_or_number")]
    pub end_amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsiderationItem {
    pub item_type: ItemType,
    pub token: String,
    #[serde(with = "serde_util::string_or_number")]
    pub identifier_or_criteria: String,
    #[serde(with = "serde_util::string_or_number")]
    pub start_amount: String,
    #[serde(with = "serde_util::string_or_number")]
    pub end_amount: String,
    pub recipient: String,
}
