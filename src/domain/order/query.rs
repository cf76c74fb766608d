//! Orders query options and their wire serialization.

use crate::shared::{OrderProtocol, Side};
use serde::{Deserialize, Serialize};

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// ─── Options ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    CreatedDate,
    EthPrice,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::CreatedDate => "created_date",
            OrderBy::EthPrice => "eth_price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

/// Listing-time bound: unix seconds or a date string the API understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ListedTime {
    Timestamp(i64),
    Text(String),
}

impl std::fmt::Display for ListedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListedTime::Timestamp(t) => write!(f, "{}", t),
            ListedTime::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Routing options shared by order reads and posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderApiOptions {
    /// Defaults to Seaport.
    pub protocol: Option<OrderProtocol>,
    /// Defaults to [`DEFAULT_SEAPORT_CONTRACT_ADDRESS`](super::DEFAULT_SEAPORT_CONTRACT_ADDRESS).
    pub protocol_address: Option<String>,
    pub side: Side,
}

impl OrderApiOptions {
    pub fn new(side: Side) -> Self {
        Self {
            protocol: None,
            protocol_address: None,
            side,
        }
    }
}

/// Filters and paging for an orders listing query.
///
/// `protocol` and `side` pick the path; everything else goes in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersQueryOptions {
    pub protocol: Option<OrderProtocol>,
    pub protocol_address: Option<String>,
    pub side: Side,
    pub limit: u32,
    pub cursor: Option<String>,
    pub payment_token_address: Option<String>,
    pub maker: Option<String>,
    pub taker: Option<String>,
    pub owner: Option<String>,
    pub bundled: Option<bool>,
    pub include_bundled: Option<bool>,
    pub listed_after: Option<ListedTime>,
    pub listed_before: Option<ListedTime>,
    /// Legacy single-token filter, used only when `token_ids` is unset.
    pub token_id: Option<String>,
    pub token_ids: Option<Vec<String>>,
    pub asset_contract_address: Option<String>,
    pub order_by: Option<OrderBy>,
    pub order_direction: Option<OrderDirection>,
    pub only_english: Option<bool>,
}

impl OrdersQueryOptions {
    pub fn new(side: Side) -> Self {
        Self {
            protocol: None,
            protocol_address: None,
            side,
            limit: DEFAULT_PAGE_SIZE,
            cursor: None,
            payment_token_address: None,
            maker: None,
            taker: None,
            owner: None,
            bundled: None,
            include_bundled: None,
            listed_after: None,
            listed_before: None,
            token_id: None,
            token_ids: None,
            asset_contract_address: None,
            order_by: None,
            order_direction: None,
            only_english: None,
        }
    }

    pub fn protocol(&self) -> OrderProtocol {
        self.protocol.unwrap_or_default()
    }
}

// ─── Serialized query ────────────────────────────────────────────────────────

/// Query parameters as the API expects them (snake_case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerializedOrdersQuery {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_bundled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listed_after: Option<ListedTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listed_before: Option<ListedTime>,
    /// Always present; a single `None` element when neither token filter was given.
    pub token_ids: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_contract_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<OrderDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_english: Option<bool>,
}

impl SerializedOrdersQuery {
    /// Flatten into `key=value` pairs. Lists repeat their key; absent values are dropped.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("limit", self.limit.to_string())];

        fn push<T: ToString>(
            pairs: &mut Vec<(&'static str, String)>,
            key: &'static str,
            v: &Option<T>,
        ) {
            if let Some(v) = v {
                pairs.push((key, v.to_string()));
            }
        }

        push(&mut pairs, "cursor", &self.cursor);
        push(&mut pairs, "payment_token_address", &self.payment_token_address);
        push(&mut pairs, "maker", &self.maker);
        push(&mut pairs, "taker", &self.taker);
        push(&mut pairs, "owner", &self.owner);
        push(&mut pairs, "bundled", &self.bundled);
        push(&mut pairs, "include_bundled", &self.include_bundled);
        push(&mut pairs, "listed_after", &self.listed_after);
        push(&mut pairs, "listed_before", &self.listed_before);
        for token_id in self.token_ids.iter().flatten() {
            pairs.push(("token_ids", token_id.clone()));
        }
        push(&mut pairs, "asset_contract_address", &self.asset_contract_address);
        push(&mut pairs, "order_by", &self.order_by.map(|o| o.as_str()));
        push(
            &mut pairs,
            "order_direction",
            &self.order_direction.map(|o| o.as_str()),
        );
        push(&mut pairs, "only_english", &self.only_english);
        pairs
    }

    /// URL-encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Rename the non-path query options to their wire names.
///
/// `token_ids` falls back to a one-element list holding `token_id` (possibly `None`).
pub fn serialize_orders_query_options(options: &OrdersQueryOptions) -> SerializedOrdersQuery {
    let token_ids = match &options.token_ids {
        Some(ids) => ids.iter().cloned().map(Some).collect(),
        None => vec![options.token_id.clone()],
    };

    SerializedOrdersQuery {
        limit: options.limit,
        cursor: options.cursor.clone(),
        payment_token_address: options.payment_token_address.clone(),
        maker: options.maker.clone(),
        taker: options.taker.clone(),
        owner: options.owner.clone(),
        bundled: options.bundled,
        include_bundled: options.include_bundled,
        listed_after: options.listed_after.clone(),
        listed_before: options.listed_before.clone(),
        token_ids,
        asset_contract_address: options.asset_contract_address.clone(),
        order_by: options.order_by,
        order_direction: options.order_direction,
        only_english: options.only_english,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_ids_pass_through() {
        let mut options = OrdersQueryOptions::new(Side::Ask);
        options.token_ids = Some(vec!["1".to_string(), "2".to_string()]);
        options.token_id = Some("9".to_string());
        let query = serialize_orders_query_options(&options);
        assert_eq!(
            query.token_ids,
            vec![Some("1".to_string()), Some("2".to_string())]
        );
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["token_ids"], json!(["1", "2"]));
    }

    #[test]
    fn test_single_token_id_is_wrapped() {
        let mut options = OrdersQueryOptions::new(Side::Ask);
        options.token_id = Some("5".to_string());
        let value = serde_json::to_value(serialize_orders_query_options(&options)).unwrap();
        assert_eq!(value["token_ids"], json!(["5"]));
    }

    #[test]
    fn test_no_token_filter_yields_absent_element() {
        let options = OrdersQueryOptions::new(Side::Bid);
        let query = serialize_orders_query_options(&options);
        assert_eq!(query.token_ids, vec![None]);
        assert!(!query.to_query_string().contains("token_ids"));
    }

    #[test]
    fn test_fields_are_snake_case() {
        let mut options = OrdersQueryOptions::new(Side::Ask);
        options.limit = 50;
        options.cursor = Some("abc".to_string());
        options.payment_token_address = Some("0xweth".to_string());
        options.include_bundled = Some(true);
        options.listed_after = Some(ListedTime::Timestamp(1690000000));
        options.listed_before = Some(ListedTime::Text("2023-08-01".to_string()));
        options.asset_contract_address = Some("0xnft".to_string());
        options.order_by = Some(OrderBy::EthPrice);
        options.order_direction = Some(OrderDirection::Asc);
        options.only_english = Some(false);

        let value = serde_json::to_value(serialize_orders_query_options(&options)).unwrap();
        assert_eq!(value["limit"], 50);
        assert_eq!(value["cursor"], "abc");
        assert_eq!(value["payment_token_address"], "0xweth");
        assert_eq!(value["include_bundled"], true);
        assert_eq!(value["listed_after"], 1690000000);
        assert_eq!(value["listed_before"], "2023-08-01");
        assert_eq!(value["asset_contract_address"], "0xnft");
        assert_eq!(value["order_by"], "eth_price");
        assert_eq!(value["order_direction"], "asc");
        assert_eq!(value["only_english"], false);
        assert!(value.get("maker").is_none());
        assert!(value.get("side").is_none());
        assert!(value.get("protocol").is_none());
    }

    #[test]
    fn test_query_string() {
        let mut options = OrdersQueryOptions::new(Side::Ask);
        options.limit = 2;
        options.token_ids = Some(vec!["1".to_string(), "2".to_string()]);
        options.maker = Some("0xabc".to_string());
        options.listed_before = Some(ListedTime::Text("2023-08-01 00:00".to_string()));
        options.order_by = Some(OrderBy::CreatedDate);
        let qs = serialize_orders_query_options(&options).to_query_string();
        assert_eq!(
            qs,
            "limit=2&maker=0xabc&listed_before=2023-08-01%2000%3A00&token_ids=1&token_ids=2&order_by=created_date"
        );
    }

    #[test]
    fn test_default_limit_and_protocol() {
        let options = OrdersQueryOptions::new(Side::Ask);
        assert_eq!(options.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(options.protocol(), OrderProtocol::Seaport);
    }
}
