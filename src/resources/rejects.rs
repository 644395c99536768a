use crate::client::{MandrillClient, MandrillError};
use crate::domain::{RejectDeleted, RejectEntry};
use crate::transport;

/// Rejection-blacklist operations (`rejects/*`).
///
/// Obtained from [`MandrillClient::rejects`]. Each method assembles a
/// parameter map, makes one [`MandrillClient::call`], and decodes the
/// result; errors propagate unchanged.
pub struct Rejects<'a> {
    client: &'a MandrillClient,
}

impl<'a> Rejects<'a> {
    pub(crate) fn new(client: &'a MandrillClient) -> Self {
        Self { client }
    }

    /// Retrieve the email rejection blacklist, optionally limited to one
    /// address. The service returns up to 1000 entries.
    pub fn list(&self, email: Option<&str>) -> Result<Vec<RejectEntry>, MandrillError> {
        let value = self
            .client
            .call("rejects/list", transport::encode_reject_list(email))?;
        Ok(transport::decode_reject_list(value)?)
    }

    /// Delete one address from the rejection blacklist.
    ///
    /// There is no limit on deletions, but each one affects the account's
    /// reputation.
    pub fn delete(&self, email: &str) -> Result<RejectDeleted, MandrillError> {
        let value = self
            .client
            .call("rejects/delete", transport::encode_reject_delete(email))?;
        Ok(transport::decode_reject_delete(value)?)
    }
}
