use serde_json::Value;

use crate::domain::{SenderInfo, UserInfo};
use crate::transport::call::TransportError;

/// `users/ping` answers with the bare JSON string `"PONG!"`.
pub fn decode_ping(value: Value) -> Result<String, TransportError> {
    Ok(serde_json::from_value(value)?)
}

pub fn decode_user_info(value: Value) -> Result<UserInfo, TransportError> {
    Ok(serde_json::from_value(value)?)
}

pub fn decode_senders(value: Value) -> Result<Vec<SenderInfo>, TransportError> {
    Ok(serde_json::from_value(value)?)
}
