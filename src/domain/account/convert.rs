//! Conversion: AccountResponse → Account.

use super::wire;
use super::{Account, AccountUser};

impl From<wire::AccountResponse> for Account {
    fn from(source: wire::AccountResponse) -> Self {
        Account {
            address: source.address,
            config: source.config,
            profile_img_url: source.profile_img_url,
            user: source.user.map(|u| AccountUser {
                username: u.username,
            }),
        }
    }
}
