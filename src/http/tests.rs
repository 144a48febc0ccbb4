//! Tests for the HTTP transport

use super::*;
use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::testing::RecordingSleeper;
use crate::types::{Method, QueryParams};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport(sleeper: Arc<RecordingSleeper>) -> HttpTransport {
    HttpTransport::with_sleeper(
        &Credentials::new("acc", "ref"),
        &ClientConfig::default(),
        sleeper,
    )
    .unwrap()
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("search_type", "all")
        .query("before_timestamp", "100")
        .json(json!({"key": "value"}));

    assert_eq!(config.query.get("search_type"), Some(&"all".to_string()));
    assert_eq!(config.query.get("before_timestamp"), Some(&"100".to_string()));
    assert!(config.body.is_some());
}

#[tokio::test]
async fn test_sends_cookies_and_web_client_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Cookie", "ACCESS_TOKEN=acc; REFRESH_TOKEN=ref"))
        .and(header("Accept", "application/json"))
        .and(header("Origin", "https://www.codementor.io"))
        .and(header("Referer", "https://www.codementor.io/"))
        .and(header("X-Requested-From", "cm-web"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "alice"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = transport(Arc::default());
    let body = transport
        .get(&format!("{}/me", mock_server.uri()), QueryParams::new())
        .await
        .unwrap();

    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn test_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/requests/search"))
        .and(query_param("search_type", "related"))
        .and(query_param("before_timestamp", "1700000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = transport(Arc::default());
    let body = transport
        .send(
            Method::GET,
            &format!("{}/requests/search", mock_server.uri()),
            RequestConfig::new()
                .query("search_type", "related")
                .query("before_timestamp", "1700000000"),
        )
        .await
        .unwrap();

    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_query_params_merge_with_template_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/requests/abc"))
        .and(query_param("access_as", "mentor"))
        .and(query_param("extra", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"random_key": "abc"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = transport(Arc::default());
    let url = format!("{}/requests/abc?access_as=mentor", mock_server.uri());
    let body = transport
        .send(Method::GET, &url, RequestConfig::new().query("extra", "1"))
        .await
        .unwrap();

    assert_eq!(body["random_key"], "abc");
}

#[tokio::test]
async fn test_post_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/requests/abc/interests"))
        .and(body_json(json!({"message": "hi", "open_to_special_rate": false})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = transport(Arc::default());
    let body = transport
        .post(
            &format!("{}/requests/abc/interests", mock_server.uri()),
            json!({"message": "hi", "open_to_special_rate": false}),
        )
        .await
        .unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_rate_limit_waits_then_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lessons"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/lessons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "1"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sleeper = Arc::new(RecordingSleeper::default());
    let transport = transport(sleeper.clone());
    let body = transport
        .get(&format!("{}/lessons", mock_server.uri()), QueryParams::new())
        .await
        .unwrap();

    assert_eq!(body, json!([{"id": "1"}]));
    assert_eq!(
        sleeper.waits(),
        vec![Duration::from_secs(60), Duration::from_secs(60)]
    );
}

#[tokio::test]
async fn test_rate_limit_retries_identical_post() {
    let mock_server = MockServer::start().await;
    let payload = json!({"message": {"content": "hello", "type": "message"}});

    Mock::given(method("POST"))
        .and(path("/chats/messages/bob"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chats/messages/bob"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "m1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sleeper = Arc::new(RecordingSleeper::default());
    let transport = transport(sleeper.clone());
    let body = transport
        .post(&format!("{}/chats/messages/bob", mock_server.uri()), payload)
        .await
        .unwrap();

    assert_eq!(body["id"], "m1");
    assert_eq!(sleeper.waits().len(), 1);
}

#[tokio::test]
async fn test_client_error_is_request_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lessons/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sleeper = Arc::new(RecordingSleeper::default());
    let transport = transport(sleeper.clone());
    let err = transport
        .get(&format!("{}/lessons/404", mock_server.uri()), QueryParams::new())
        .await
        .unwrap_err();

    match err {
        Error::RequestFailed { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("Expected RequestFailed, got {other:?}"),
    }
    assert!(sleeper.waits().is_empty());
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = transport(Arc::default());
    let err = transport
        .get(&format!("{}/me", mock_server.uri()), QueryParams::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_empty_body_is_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/requests/abc/interests"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let transport = transport(Arc::default());
    let body = transport
        .post(
            &format!("{}/requests/abc/interests", mock_server.uri()),
            json!({}),
        )
        .await
        .unwrap();

    assert_eq!(body, serde_json::Value::Null);
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let transport = transport(Arc::default());
    let err = transport
        .get(&format!("{}/me", mock_server.uri()), QueryParams::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[test]
fn test_invalid_header_value_is_config_error() {
    let config = ClientConfig::builder().header("X-Bad", "line\nbreak").build();
    let err = HttpTransport::new(&Credentials::new("a", "r"), &config).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { .. }));
}

#[tokio::test]
async fn test_tokio_sleeper_zero_duration() {
    TokioSleeper.sleep(Duration::ZERO).await;
}
