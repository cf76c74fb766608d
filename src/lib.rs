//! # OpenSea Orders
//!
//! Typed access to the OpenSea v2 order API: listings, offers, collection
//! offers and fulfillment data.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Shared enums, domain models, wire types, path/payload builders (always available)
//! 2. **HTTP API**: `OpenSeaHttp`, one method per endpoint, returns wire types
//! 3. **High-Level Client**: `OpenSeaClient` with an `orders()` sub-client returning domain types
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use opensea_orders::prelude::*;
//!
//! let client = OpenSeaClient::builder()
//!     .chain(Chain::Mainnet)
//!     .api_key("...")
//!     .build()?;
//!
//! let mut options = OrdersQueryOptions::new(Side::Ask);
//! options.asset_contract_address = Some("0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d".into());
//! options.token_id = Some("1".into());
//! let page = client.orders().get_orders(&options).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared enums used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `OpenSeaClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared enums
    pub use crate::shared::{Chain, OrderProtocol, Side};

    // Domain types: account, asset
    pub use crate::domain::account::{account_from_json, Account, AccountUser};
    pub use crate::domain::asset::{asset_bundle_from_json, Asset, AssetBundle, AssetContract};

    // Domain types: order
    pub use crate::domain::order::protocol::{
        ConsiderationItem, ItemType, OfferItem, OrderComponents, OrderWithCounter,
    };
    pub use crate::domain::order::query::{
        ListedTime, OrderBy, OrderDirection, SerializedOrdersQuery,
    };
    pub use crate::domain::order::{
        deserialize_order, get_build_collection_offer_payload, get_build_offer_path,
        get_collection_path, get_fulfill_listing_payload, get_fulfill_offer_payload,
        get_fulfillment_data_path, get_orders_api_path, get_post_collection_offer_path,
        get_post_collection_offer_payload, get_post_order_payload, serialize_orders_query_options,
        Order, OrderApiOptions, OrderFee, OrderType, OrdersPage, OrdersQueryOptions,
        ProtocolData, ValidationError, DEFAULT_SEAPORT_CONTRACT_ADDRESS,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{MAINNET_API_URL, TESTNET_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{OpenSeaClient, OpenSeaClientBuilder, OrdersClient};
}
