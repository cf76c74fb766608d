//! Conversions: order wire types → order domain types.

use super::wire;
use super::{Order, OrderFee, OrdersPage, ValidationError};
use alloy_primitives::U256;
use std::str::FromStr;

impl From<wire::SerializedOrderFee> for OrderFee {
    fn from(fee: wire::SerializedOrderFee) -> Self {
        OrderFee {
            account: fee.account.into(),
            basis_points: fee.basis_points,
        }
    }
}

impl TryFrom<wire::SerializedOrder> for Order {
    type Error = ValidationError;

    fn try_from(order: wire::SerializedOrder) -> Result<Self, Self::Error> {
        let current_price = U256::from_str(&order.current_price)
            .map_err(|_| ValidationError::InvalidPrice(order.current_price.clone()))?;

        Ok(Order {
            created_date: order.created_date,
            closing_date: order.closing_date,
            listing_time: order.listing_time,
            expiration_time: order.expiration_time,
            order_hash: order.order_hash,
            maker: order.maker.into(),
            taker: order.taker.map(Into::into),
            protocol_data: order.protocol_data,
            protocol_address: order.protocol_address,
            current_price,
            maker_fees: order.maker_fees.into_iter().map(Into::into).collect(),
            taker_fees: order.taker_fees.into_iter().map(Into::into).collect(),
            side: order.side,
            order_type: order.order_type,
            cancelled: order.cancelled,
            finalized: order.finalized,
            marked_invalid: order.marked_invalid,
            client_signature: order.client_signature,
            maker_asset_bundle: order.maker_asset_bundle.into(),
            taker_asset_bundle: order.taker_asset_bundle.into(),
        })
    }
}

impl TryFrom<wire::OrdersQueryResponse> for OrdersPage {
    type Error = ValidationError;

    fn try_from(resp: wire::OrdersQueryResponse) -> Result<Self, Self::Error> {
        let orders = resp
            .orders
            .into_iter()
            .map(Order::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(OrdersPage {
            orders,
            next: resp.next,
            previous: resp.previous,
        })
    }
}
