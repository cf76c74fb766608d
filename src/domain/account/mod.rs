//! Account domain: marketplace user accounts attached to orders and fees.

mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Profile data for a marketplace account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    /// Account badge (e.g. `verified`); `None` when the API sends null.
    pub config: Option<String>,
    pub profile_img_url: Option<String>,
    pub user: Option<AccountUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUser {
    pub username: Option<String>,
}

/// Build an [`Account`] from raw API JSON.
///
/// Fails when the value does not have the account shape (e.g. no `address`).
pub fn account_from_json(raw: serde_json::Value) -> Result<Account, serde_json::Error> {
    let wire: wire::AccountResponse = serde_json::from_value(raw)?;
    Ok(wire.into())
}
