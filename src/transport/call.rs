use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::ApiKey;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Inject the API key under the reserved `key` field and serialize the full
/// parameter map as the request body.
///
/// A caller-supplied `key` entry is overwritten.
pub fn encode_call_body(
    api_key: &ApiKey,
    mut params: Map<String, Value>,
) -> Result<String, TransportError> {
    params.insert(
        ApiKey::FIELD.to_owned(),
        Value::String(api_key.as_str().to_owned()),
    );
    Ok(serde_json::to_string(&params)?)
}

#[derive(Debug, Clone, Deserialize)]
/// The failure-response shape the service documents:
/// `{"status":"error","name":...,"message":...,"code":...}`.
pub struct ErrorBody {
    pub status: String,
    pub name: String,
    pub message: String,
    pub code: i64,
}

/// Decode the documented failure shape, if the body matches it.
///
/// `None` means the body deviates from the contract (not an object, or any of
/// the four fields missing or mistyped); classification then treats the
/// response as malformed rather than as a mapped API error.
pub fn decode_error_body(value: &Value) -> Option<ErrorBody> {
    ErrorBody::deserialize(value).ok()
}
