//! Wire types for account objects.

use serde::{Deserialize, Serialize};

/// Raw account as embedded in order, fee and bundle responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountResponse {
    pub address: String,
    #[serde(default)]
    pub config: Option<String>,
    #[serde(default)]
    pub profile_img_url: Option<String>,
    #[serde(default)]
    pub user: Option<AccountUserResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountUserResponse {
    #[serde(default)]
    pub username: Option<String>,
}
