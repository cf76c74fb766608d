//! Low-level HTTP client: `OpenSeaHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the `orders()` sub-client). Each call is a single attempt.

use crate::domain::order::payload::{
    get_build_collection_offer_payload, get_fulfill_listing_payload, get_fulfill_offer_payload,
    get_post_collection_offer_payload, get_post_order_payload, DEFAULT_SEAPORT_CONTRACT_ADDRESS,
};
use crate::domain::order::paths::{
    get_build_offer_path, get_collection_path, get_fulfillment_data_path, get_orders_api_path,
    get_post_collection_offer_path,
};
use crate::domain::order::query::{
    serialize_orders_query_options, OrderApiOptions, OrdersQueryOptions,
};
use crate::domain::order::wire::{
    BuildOfferResponse, FulfillmentDataResponse, GetCollectionResponse, OrdersPostQueryResponse,
    OrdersQueryResponse, PostOfferResponse,
};
use crate::domain::order::ProtocolData;
use crate::error::HttpError;
use crate::network::API_KEY_HEADER;
use crate::shared::{Chain, Side};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the OpenSea REST API.
pub struct OpenSeaHttp {
    base_url: String,
    client: Client,
    api_key: Option<String>,
}

impl OpenSeaHttp {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, HttpError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn get_orders(
        &self,
        chain: Chain,
        options: &OrdersQueryOptions,
    ) -> Result<OrdersQueryResponse, HttpError> {
        let path = get_orders_api_path(chain, options.protocol(), options.side);
        let query = serialize_orders_query_options(options).to_query_string();
        self.get(&self.url(&path, Some(&query))).await
    }

    pub async fn post_order(
        &self,
        chain: Chain,
        order: ProtocolData,
        api_options: &OrderApiOptions,
    ) -> Result<OrdersPostQueryResponse, HttpError> {
        let path = get_orders_api_path(
            chain,
            api_options.protocol.unwrap_or_default(),
            api_options.side,
        );
        let protocol_address = api_options
            .protocol_address
            .as_deref()
            .unwrap_or(DEFAULT_SEAPORT_CONTRACT_ADDRESS);
        let body = get_post_order_payload(order, protocol_address);
        self.post(&self.url(&path, None), &body).await
    }

    // ── Collections & offers ─────────────────────────────────────────────

    pub async fn get_collection(&self, slug: &str) -> Result<GetCollectionResponse, HttpError> {
        self.get(&self.url(&get_collection_path(slug), None)).await
    }

    pub async fn build_collection_offer(
        &self,
        offerer_address: &str,
        quantity: u64,
        collection_slug: &str,
    ) -> Result<BuildOfferResponse, HttpError> {
        let body = get_build_collection_offer_payload(offerer_address, quantity, collection_slug);
        self.post(&self.url(&get_build_offer_path(), None), &body)
            .await
    }

    pub async fn post_collection_offer(
        &self,
        collection_slug: &str,
        order: ProtocolData,
    ) -> Result<PostOfferResponse, HttpError> {
        let body = get_post_collection_offer_payload(collection_slug, order);
        self.post(&self.url(&get_post_collection_offer_path(), None), &body)
            .await
    }

    // ── Fulfillment ──────────────────────────────────────────────────────

    pub async fn fulfillment_data(
        &self,
        chain: Chain,
        fulfiller_address: &str,
        order_hash: &str,
        protocol_address: &str,
        side: Side,
    ) -> Result<FulfillmentDataResponse, HttpError> {
        let url = self.url(&get_fulfillment_data_path(side), None);
        match side {
            Side::Ask => {
                let body = get_fulfill_listing_payload(
                    fulfiller_address,
                    order_hash,
                    protocol_address,
                    chain,
                );
                self.post(&url, &body).await
            }
            Side::Bid => {
                let body = get_fulfill_offer_payload(
                    fulfiller_address,
                    order_hash,
                    protocol_address,
                    chain,
                );
                self.post(&url, &body).await
            }
        }
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    fn url(&self, path: &str, query: Option<&str>) -> String {
        build_url(&self.base_url, path, query)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::GET, url, None::<&()>)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::POST, url, Some(body))
            .await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        tracing::debug!(method = %method, "Sending request to {}", url);

        let mut req = self.client.request(method, url);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let body_text = resp.text().await.unwrap_or_default();
        Err(HttpError::from_status(status.as_u16(), body_text))
    }
}

impl Clone for OpenSeaHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            api_key: self.api_key.clone(),
        }
    }
}

/// Join base URL, path and an optional (already encoded) query string.
fn build_url(base_url: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{}{}?{}", base_url, path, q),
        _ => format!("{}{}", base_url, path),
    }
}
