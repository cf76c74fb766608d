//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types used by client code
//! - `wire.rs`: Raw serde structs matching API responses
//! - `convert.rs`: `TryFrom`/`From` conversions from wire to domain
//! - `client.rs`: Sub-client with HTTP methods (orders only)

pub mod account;
pub mod asset;
pub mod order;
