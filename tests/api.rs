//! End-to-end tests over a local mock HTTP server: the full blocking stack,
//! from parameter encoding through status classification.

use httpmock::prelude::*;
use serde_json::{Map, json};

use mandrill::{ApiErrorKind, MandrillClient, MandrillError};

fn client_for(server: &MockServer) -> MandrillClient {
    MandrillClient::builder()
        .api_key("test_key")
        .root(server.url("/api/1.0"))
        .build()
        .unwrap()
}

#[test]
fn users_ping_round_trip() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/1.0/users/ping.json")
            .header("content-type", "application/json")
            .json_body_partial(r#"{"key": "test_key"}"#);
        then.status(200).json_body(json!("PONG!"));
    });

    let client = client_for(&server);
    assert_eq!(client.users().ping().unwrap(), "PONG!");
    mock.assert();
}

#[test]
fn call_returns_success_body_unchanged_with_key_injected() {
    let server = MockServer::start();
    let body = json!([{"email": "a@b.com", "reason": "hard-bounce", "expired": false}]);
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/1.0/rejects/list.json")
            .json_body_partial(r#"{"key": "test_key", "email": "a@b.com"}"#);
        then.status(200).json_body(body.clone());
    });

    let client = client_for(&server);
    let mut params = Map::new();
    params.insert("email".to_owned(), json!("a@b.com"));
    let result = client.call("rejects/list", params).unwrap();
    assert_eq!(result, body);
    mock.assert();
}

#[test]
fn rejects_list_decodes_typed_entries() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/1.0/rejects/list.json");
        then.status(200).json_body(json!([
            {
                "email": "a@b.com",
                "reason": "hard-bounce",
                "created_at": "2026-01-01 12:00:00",
                "expired": false
            }
        ]));
    });

    let client = client_for(&server);
    let entries = client.rejects().list(Some("a@b.com")).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].email, "a@b.com");
    assert_eq!(entries[0].reason, "hard-bounce");
    assert!(!entries[0].expired);
}

#[test]
fn rejects_delete_decodes_status_object() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/1.0/rejects/delete.json")
            .json_body_partial(r#"{"email": "a@b.com"}"#);
        then.status(200)
            .json_body(json!({"email": "a@b.com", "deleted": true}));
    });

    let client = client_for(&server);
    let deleted = client.rejects().delete("a@b.com").unwrap();
    assert!(deleted.deleted);
    mock.assert();
}

#[test]
fn users_info_decodes_account_stats() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/1.0/users/info.json");
        then.status(200).json_body(json!({
            "username": "example",
            "reputation": 81,
            "hourly_quota": 250,
            "backlog": 0,
            "stats": {"today": {"sent": 5}}
        }));
    });

    let client = client_for(&server);
    let info = client.users().info().unwrap();
    assert_eq!(info.username, "example");
    assert_eq!(info.stats["today"].sent, 5);
}

#[test]
fn failure_statuses_raise_the_mapped_error_kind() {
    for status in [400u16, 404, 500, 503] {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/1.0/users/ping.json");
            then.status(status).json_body(json!({
                "status": "error",
                "code": -1,
                "name": "Invalid_Key",
                "message": "Invalid API key"
            }));
        });

        let client = client_for(&server);
        let err = client.users().ping().unwrap_err();
        match err {
            MandrillError::Api(api) => {
                assert_eq!(api.kind, ApiErrorKind::InvalidKey, "status {status}");
                assert_eq!(api.code, -1);
            }
            other => panic!("unexpected error for status {status}: {other:?}"),
        }
    }
}

#[test]
fn unknown_error_name_degrades_to_generic() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/1.0/users/ping.json");
        then.status(502).json_body(json!({
            "status": "error",
            "code": 42,
            "name": "Some_Future_Error",
            "message": "you cannot know this yet"
        }));
    });

    let client = client_for(&server);
    match client.users().ping().unwrap_err() {
        MandrillError::Api(api) => {
            assert_eq!(api.kind, ApiErrorKind::Generic);
            assert_eq!(api.message, "you cannot know this yet");
            assert_eq!(api.code, 42);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn success_status_never_raises_even_with_error_shaped_body() {
    let server = MockServer::start();
    let body = json!({"status": "error", "code": -1, "name": "Invalid_Key", "message": "nope"});
    server.mock(|when, then| {
        when.method(POST).path("/api/1.0/odd/endpoint.json");
        then.status(200).json_body(body.clone());
    });

    let client = client_for(&server);
    let result = client.call("odd/endpoint", Map::new()).unwrap();
    assert_eq!(result, body);
}

#[test]
fn non_json_body_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/1.0/users/ping.json");
        then.status(200).body("definitely not json");
    });

    let client = client_for(&server);
    match client.call("users/ping", Map::new()).unwrap_err() {
        MandrillError::Decode { body, .. } => assert_eq!(body, "definitely not json"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn failure_status_with_incomplete_error_shape_is_unexpected_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/1.0/users/ping.json");
        then.status(400).json_body(json!({"status": "error"}));
    });

    let client = client_for(&server);
    match client.call("users/ping", Map::new()).unwrap_err() {
        MandrillError::UnexpectedResponse { body } => {
            assert_eq!(body, json!({"status": "error"}));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn key_resolves_from_the_environment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/1.0/users/ping.json")
            .json_body_partial(r#"{"key": "abc"}"#);
        then.status(200).json_body(json!("PONG!"));
    });

    // SAFETY: the only test that touches MANDRILL_APIKEY; every other test
    // passes an explicit key, which takes precedence over the variable.
    unsafe { std::env::set_var(mandrill::ENV_API_KEY, "abc") };
    let result = MandrillClient::builder()
        .root(server.url("/api/1.0"))
        .build()
        .and_then(|client| client.users().ping());
    unsafe { std::env::remove_var(mandrill::ENV_API_KEY) };

    assert_eq!(result.unwrap(), "PONG!");
    mock.assert();
}

#[test]
fn scalar_and_nested_success_payloads_pass_through() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/1.0/scalar.json");
        then.status(200).json_body(json!(17));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/1.0/nested.json");
        then.status(200)
            .json_body(json!({"a": [{"b": {"c": null}}]}));
    });

    let client = client_for(&server);
    assert_eq!(client.call("scalar", Map::new()).unwrap(), json!(17));
    assert_eq!(
        client.call("nested", Map::new()).unwrap(),
        json!({"a": [{"b": {"c": null}}]})
    );
}

#[test]
fn wrapper_shape_mismatch_is_a_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/1.0/users/ping.json");
        then.status(200).json_body(json!({"PING": "PONG!"}));
    });

    let client = client_for(&server);
    assert!(matches!(
        client.users().ping().unwrap_err(),
        MandrillError::Parse(_)
    ));
}
