use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// One entry on the rejection blacklist (`rejects/list`).
pub struct RejectEntry {
    /// The blocked address.
    pub email: String,
    /// Event that caused the rejection (hard-bounce, soft-bounce, spam, unsub).
    pub reason: String,
    #[serde(default)]
    pub detail: Option<String>,
    /// When the address was added to the blacklist.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_event_at: Option<String>,
    /// When the entry will expire; may already be in the past.
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub expired: bool,
    /// Sending stats for the sender this entry applies to, if any.
    #[serde(default)]
    pub sender: Option<SenderInfo>,
    #[serde(default)]
    pub subaccount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Outcome of removing an address from the blacklist (`rejects/delete`).
pub struct RejectDeleted {
    pub email: String,
    pub deleted: bool,
    #[serde(default)]
    pub subaccount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Aggregate sending stats for one sender address (`users/senders`).
pub struct SenderInfo {
    pub address: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub hard_bounces: u64,
    #[serde(default)]
    pub soft_bounces: u64,
    #[serde(default)]
    pub rejects: u64,
    #[serde(default)]
    pub complaints: u64,
    #[serde(default)]
    pub unsubs: u64,
    #[serde(default)]
    pub opens: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub unique_opens: u64,
    #[serde(default)]
    pub unique_clicks: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Account information (`users/info`).
pub struct UserInfo {
    pub username: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub public_id: Option<String>,
    /// Reputation on a 0..=100 scale; higher earns a larger hourly quota.
    #[serde(default)]
    pub reputation: i64,
    /// Maximum messages per hour for this account.
    #[serde(default)]
    pub hourly_quota: i64,
    /// Messages currently queued beyond the hourly quota.
    #[serde(default)]
    pub backlog: i64,
    /// Aggregate stats keyed by period (`today`, `last_7_days`, ...).
    #[serde(default)]
    pub stats: BTreeMap<String, SendingStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
/// Sending totals for one stats period.
pub struct SendingStats {
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub hard_bounces: u64,
    #[serde(default)]
    pub soft_bounces: u64,
    #[serde(default)]
    pub rejects: u64,
    #[serde(default)]
    pub complaints: u64,
    #[serde(default)]
    pub unsubs: u64,
    #[serde(default)]
    pub opens: u64,
    #[serde(default)]
    pub unique_opens: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub unique_clicks: u64,
}
