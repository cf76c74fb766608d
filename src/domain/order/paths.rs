//! URL path builders for the order endpoints.
//!
//! Templates are reproduced exactly; the API routes on them.

use crate::shared::{Chain, OrderProtocol, Side};

/// `/v2/orders/{chain}/{protocol}/{listings|offers}`
pub fn get_orders_api_path(chain: Chain, protocol: OrderProtocol, side: Side) -> String {
    format!(
        "/v2/orders/{}/{}/{}",
        chain.name(),
        protocol.as_str(),
        side.path_segment()
    )
}

/// `/api/v1/collection/{slug}`. The slug is inserted as given.
pub fn get_collection_path(slug: &str) -> String {
    format!("/api/v1/collection/{}", slug)
}

pub fn get_build_offer_path() -> String {
    "/v2/offers/build".to_string()
}

pub fn get_post_collection_offer_path() -> String {
    "/v2/offers".to_string()
}

/// `/v2/{listings|offers}/fulfillment_data`
pub fn get_fulfillment_data_path(side: Side) -> String {
    format!("/v2/{}/fulfillment_data", side.path_segment())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_api_path() {
        assert_eq!(
            get_orders_api_path(Chain::Mainnet, OrderProtocol::Seaport, Side::Ask),
            "/v2/orders/ethereum/seaport/listings"
        );
        assert_eq!(
            get_orders_api_path(Chain::Mainnet, OrderProtocol::Seaport, Side::Bid),
            "/v2/orders/ethereum/seaport/offers"
        );
        assert_eq!(
            get_orders_api_path(Chain::Goerli, OrderProtocol::Seaport, Side::Ask),
            "/v2/orders/goerli/seaport/listings"
        );
    }

    #[test]
    fn test_collection_path_is_unescaped() {
        assert_eq!(get_collection_path("boredapes"), "/api/v1/collection/boredapes");
        assert_eq!(get_collection_path("a b"), "/api/v1/collection/a b");
    }

    #[test]
    fn test_fixed_paths() {
        assert_eq!(get_build_offer_path(), "/v2/offers/build");
        assert_eq!(get_post_collection_offer_path(), "/v2/offers");
    }

    #[test]
    fn test_fulfillment_data_path() {
        assert_eq!(
            get_fulfillment_data_path(Side::Ask),
            "/v2/listings/fulfillment_data"
        );
        assert_eq!(
            get_fulfillment_data_path(Side::Bid),
            "/v2/offers/fulfillment_data"
        );
    }
}
