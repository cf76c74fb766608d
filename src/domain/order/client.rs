//! Orders sub-client: query, post, offers, fulfillment.

use crate::client::OpenSeaClient;
use crate::domain::order::query::{OrderApiOptions, OrdersQueryOptions};
use crate::domain::order::wire::{
    BuildOfferResponse, FulfillmentDataResponse, GetCollectionResponse, PostOfferResponse,
};
use crate::domain::order::{Order, OrdersPage, ProtocolData};
use crate::error::SdkError;
use crate::shared::Side;

/// Sub-client for order operations.
pub struct Orders<'a> {
    pub(crate) client: &'a OpenSeaClient,
}

impl<'a> Orders<'a> {
    /// Fetch one page of orders matching `options`.
    pub async fn get_orders(&self, options: &OrdersQueryOptions) -> Result<OrdersPage, SdkError> {
        let resp = self
            .client
            .http
            .get_orders(self.client.chain, options)
            .await?;
        OrdersPage::try_from(resp).map_err(|e| {
            tracing::warn!(error = %e, "Orders response failed conversion");
            SdkError::Validation(e)
        })
    }

    /// Fetch the first order matching `options`.
    pub async fn get_order(&self, options: &OrdersQueryOptions) -> Result<Order, SdkError> {
        let page = self.get_orders(options).await?;
        page.orders.into_iter().next().ok_or_else(|| {
            SdkError::NotFound(format!("No {} order matching query", options.side))
        })
    }

    /// Post a signed Seaport order and return it as stored by the API.
    pub async fn post_order(
        &self,
        order: ProtocolData,
        api_options: &OrderApiOptions,
    ) -> Result<Order, SdkError> {
        let resp = self
            .client
            .http
            .post_order(self.client.chain, order, api_options)
            .await?;
        Ok(Order::try_from(resp.order)?)
    }

    pub async fn collection(&self, slug: &str) -> Result<GetCollectionResponse, SdkError> {
        Ok(self.client.http.get_collection(slug).await?)
    }

    /// Ask the API for the consideration and zone of a collection offer.
    pub async fn build_collection_offer(
        &self,
        offerer_address: &str,
        quantity: u64,
        collection_slug: &str,
    ) -> Result<BuildOfferResponse, SdkError> {
        Ok(self
            .client
            .http
            .build_collection_offer(offerer_address, quantity, collection_slug)
            .await?)
    }

    pub async fn post_collection_offer(
        &self,
        collection_slug: &str,
        order: ProtocolData,
    ) -> Result<PostOfferResponse, SdkError> {
        Ok(self
            .client
            .http
            .post_collection_offer(collection_slug, order)
            .await?)
    }

    /// Transaction data for buying a listing.
    pub async fn fulfill_listing(
        &self,
        fulfiller_address: &str,
        order_hash: &str,
        protocol_address: &str,
    ) -> Result<FulfillmentDataResponse, SdkError> {
        self.fulfillment_data(fulfiller_address, order_hash, protocol_address, Side::Ask)
            .await
    }

    /// Transaction data for accepting an offer.
    pub async fn fulfill_offer(
        &self,
        fulfiller_address: &str,
        order_hash: &str,
        protocol_address: &str,
    ) -> Result<FulfillmentDataResponse, SdkError> {
        self.fulfillment_data(fulfiller_address, order_hash, protocol_address, Side::Bid)
            .await
    }

    pub async fn fulfillment_data(
        &self,
        fulfiller_address: &str,
        order_hash: &str,
        protocol_address: &str,
        side: Side,
    ) -> Result<FulfillmentDataResponse, SdkError> {
        Ok(self
            .client
            .http
            .fulfillment_data(
                self.client.chain,
                fulfiller_address,
                order_hash,
                protocol_address,
                side,
            )
            .await?)
    }
}
