use serde_json::Map;

use crate::client::{MandrillClient, MandrillError};
use crate::domain::{SenderInfo, UserInfo};
use crate::transport;

/// Account-level operations (`users/*`).
///
/// Obtained from [`MandrillClient::users`].
pub struct Users<'a> {
    client: &'a MandrillClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a MandrillClient) -> Self {
        Self { client }
    }

    /// Validate the API key and connectivity; answers `"PONG!"`.
    pub fn ping(&self) -> Result<String, MandrillError> {
        let value = self.client.call("users/ping", Map::new())?;
        Ok(transport::decode_ping(value)?)
    }

    /// Information about the account: quota, reputation, aggregate stats.
    pub fn info(&self) -> Result<UserInfo, MandrillError> {
        let value = self.client.call("users/info", Map::new())?;
        Ok(transport::decode_user_info(value)?)
    }

    /// Per-address sending stats for all senders used by the account.
    pub fn senders(&self) -> Result<Vec<SenderInfo>, MandrillError> {
        let value = self.client.call("users/senders", Map::new())?;
        Ok(transport::decode_senders(value)?)
    }
}
