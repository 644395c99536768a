use serde_json::{Map, Value};

use crate::domain::{RejectDeleted, RejectEntry};
use crate::transport::call::TransportError;

/// Parameters for `rejects/list`. An absent filter is sent as JSON `null`,
/// matching the service's optional-parameter convention.
pub fn encode_reject_list(email: Option<&str>) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert(
        "email".to_owned(),
        email.map_or(Value::Null, |email| Value::String(email.to_owned())),
    );
    params
}

/// Parameters for `rejects/delete`.
pub fn encode_reject_delete(email: &str) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("email".to_owned(), Value::String(email.to_owned()));
    params
}

pub fn decode_reject_list(value: Value) -> Result<Vec<RejectEntry>, TransportError> {
    Ok(serde_json::from_value(value)?)
}

pub fn decode_reject_delete(value: Value) -> Result<RejectDeleted, TransportError> {
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_email_filter_is_encoded_as_null() {
        let params = encode_reject_list(None);
        assert_eq!(params["email"], Value::Null);

        let params = encode_reject_list(Some("a@b.com"));
        assert_eq!(params["email"], json!("a@b.com"));
    }

    #[test]
    fn list_response_decodes_into_entries() {
        let value = json!([
            {"email": "a@b.com", "reason": "hard-bounce", "expired": false},
            {"email": "c@d.com", "reason": "spam", "expired": true}
        ]);
        let entries = decode_reject_list(value).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].email, "a@b.com");
        assert!(entries[1].expired);
    }

    #[test]
    fn delete_response_decodes_status_object() {
        let value = json!({"email": "a@b.com", "deleted": true});
        let deleted = decode_reject_delete(value).unwrap();
        assert_eq!(deleted.email, "a@b.com");
        assert!(deleted.deleted);
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        assert!(decode_reject_list(json!({"email": "a@b.com"})).is_err());
        assert!(decode_reject_delete(json!([])).is_err());
    }
}
