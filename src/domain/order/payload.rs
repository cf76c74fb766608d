//! Request body builders for the order and offer endpoints.

use super::protocol::ProtocolData;
use super::wire::{CollectionCriteria, Criteria};
use crate::shared::Chain;
use serde::Serialize;

/// Seaport 1.5, deployed at the same address on every supported chain.
pub const DEFAULT_SEAPORT_CONTRACT_ADDRESS: &str = "0x00000000000000ADc04C56Bf30aC9d3c0aAF14dC";

fn collection_criteria(slug: &str) -> Criteria {
    Criteria {
        collection: CollectionCriteria {
            slug: slug.to_string(),
        },
        contract: None,
    }
}

// ─── Orders ──────────────────────────────────────────────────────────────────

/// Body for posting a signed order: the Seaport order plus its protocol address.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostOrderPayload {
    #[serde(flatten)]
    pub order: ProtocolData,
    pub protocol_address: String,
}

pub fn get_post_order_payload(order: ProtocolData, protocol_address: &str) -> PostOrderPayload {
    PostOrderPayload {
        order,
        protocol_address: protocol_address.to_string(),
    }
}

// ─── Collection offers ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostCollectionOfferPayload {
    pub criteria: Criteria,
    pub protocol_data: ProtocolData,
    pub protocol_address: String,
}

pub fn get_post_collection_offer_payload(
    collection_slug: &str,
    protocol_data: ProtocolData,
) -> PostCollectionOfferPayload {
    PostCollectionOfferPayload {
        criteria: collection_criteria(collection_slug),
        protocol_data,
        protocol_address: DEFAULT_SEAPORT_CONTRACT_ADDRESS.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BuildCollectionOfferPayload {
    pub offerer: String,
    pub quantity: u64,
    pub criteria: Criteria,
    pub protocol_address: String,
}

pub fn get_build_collection_offer_payload(
    offerer_address: &str,
    quantity: u64,
    collection_slug: &str,
) -> BuildCollectionOfferPayload {
    BuildCollectionOfferPayload {
        offerer: offerer_address.to_string(),
        quantity,
        criteria: collection_criteria(collection_slug),
        protocol_address: DEFAULT_SEAPORT_CONTRACT_ADDRESS.to_string(),
    }
}

// ─── Fulfillment ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FulfillmentOrder {
    pub hash: String,
    pub chain: String,
    pub protocol_address: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Fulfiller {
    pub address: String,
}

/// Body for `POST /v2/listings/fulfillment_data`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FulfillListingPayload {
    pub listing: FulfillmentOrder,
    pub fulfiller: Fulfiller,
}

/// Body for `POST /v2/offers/fulfillment_data`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FulfillOfferPayload {
    pub offer: FulfillmentOrder,
    pub fulfiller: Fulfiller,
}

fn fulfillment_parts(
    fulfiller_address: &str,
    order_hash: &str,
    protocol_address: &str,
    chain: Chain,
) -> (FulfillmentOrder, Fulfiller) {
    (
        FulfillmentOrder {
            hash: order_hash.to_string(),
            chain: chain.name().to_string(),
            protocol_address: protocol_address.to_string(),
        },
        Fulfiller {
            address: fulfiller_address.to_string(),
        },
    )
}

pub fn get_fulfill_listing_payload(
    fulfiller_address: &str,
    order_hash: &str,
    protocol_address: &str,
    chain: Chain,
) -> FulfillListingPayload {
    let (listing, fulfiller) =
        fulfillment_parts(fulfiller_address, order_hash, protocol_address, chain);
    FulfillListingPayload { listing, fulfiller }
}

pub fn get_fulfill_offer_payload(
    fulfiller_address: &str,
    order_hash: &str,
    protocol_address: &str,
    chain: Chain,
) -> FulfillOfferPayload {
    let (offer, fulfiller) =
        fulfillment_parts(fulfiller_address, order_hash, protocol_address, chain);
    FulfillOfferPayload { offer, fulfiller }
}
