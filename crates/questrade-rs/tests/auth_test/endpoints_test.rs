use crate::common::*;
use questrade_rs::{Credentials, Environment, QuestradeClient, QuestradeError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
/// =============================================================================
/// LOGIN TESTS
/// =============================================================================
#[tokio::test]
async fn test_login_replaces_credentials_with_response() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    let client = setup_client(&server);
    assert!(!client.credentials().is_logged_in());
    assert!(client.session_timer().is_none());

    let timer = client.login().await.expect("login failed");

    let expected = Credentials {
        access_token: "T1".into(),
        token_type: "Bearer".into(),
        expires_in: 1800,
        refresh_token: "abc2".into(),
        api_server: api_server(&server),
    };
    assert_eq!(*client.credentials(), expected);
    assert_eq!(client.session_timer(), Some(timer));
    assert!(!timer.is_expired());
    assert!(timer.remaining() <= Duration::from_secs(1800));
    assert!(timer.remaining() > Duration::from_secs(1700));
}
#[tokio::test]
async fn test_login_then_get_sends_bearer_header() {
    let server = MockServer::start().await;
    let client = setup_logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/time"))
        .and(header("Authorization", "Bearer T1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"time": "2024-03-01T09:30:00.000000-05:00"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let time = client.get_server_time().await.expect("get time failed");
    assert_eq!(time.to_rfc3339(), "2024-03-01T14:30:00+00:00");
}
#[tokio::test]
async fn test_login_uses_rotated_refresh_token() {
    let server = MockServer::start().await;
    let client = setup_logged_in_client(&server).await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("refresh_token=abc2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "T2",
            "token_type": "Bearer",
            "expires_in": 900,
            "refresh_token": "abc3",
            "api_server": api_server(&server),
        })))
        .expect(1)
        .mount(&server)
        .await;

    client.login().await.expect("second login failed");
    let creds = client.credentials();
    assert_eq!(creds.access_token, "T2");
    assert_eq!(creds.refresh_token, "abc3");
    assert_eq!(creds.expires_in, 900);
}
#[tokio::test]
async fn test_failed_login_keeps_previous_credentials() {
    let server = MockServer::start().await;
    let client = setup_logged_in_client(&server).await;
    let before = client.credentials();
    server.reset().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&server)
        .await;

    let err = client.login().await.unwrap_err();
    match err {
        QuestradeError::Api(e) => {
            assert_eq!(e.status_code, 400);
            assert_eq!(e.message, "Bad Request");
            assert!(e.endpoint.ends_with("/oauth2/token"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(client.credentials(), before);
}
#[tokio::test]
async fn test_login_network_failure_is_request_error() {
    let client = QuestradeClient::new(
        REFRESH_TOKEN,
        Environment::Custom("http://127.0.0.1:1/oauth2/".into()),
    )
    .unwrap();
    let err = client.login().await.unwrap_err();
    assert!(matches!(err, QuestradeError::RequestError(_)), "got {err:?}");
    assert_eq!(client.credentials().refresh_token, REFRESH_TOKEN);
}
/// =============================================================================
/// REVOKE TESTS
/// =============================================================================
#[tokio::test]
async fn test_revoke_clears_credentials() {
    let server = MockServer::start().await;
    let client = setup_logged_in_client(&server).await;
    Mock::given(method("POST"))
        .and(path("/oauth2/revoke"))
        .and(body_string_contains("token=T1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.revoke_auth().await.expect("revoke failed");
    assert_eq!(*client.credentials(), Credentials::default());
    assert!(client.session_timer().is_none());
}
#[tokio::test]
async fn test_revoke_rejected_still_clears_credentials() {
    let server = MockServer::start().await;
    let client = setup_logged_in_client(&server).await;
    Mock::given(method("POST"))
        .and(path("/oauth2/revoke"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 1016, "message": "Invalid token"
        })))
        .mount(&server)
        .await;

    let err = client.revoke_auth().await.unwrap_err();
    match err {
        QuestradeError::Api(e) => {
            assert_eq!(e.code, 1016);
            assert_eq!(e.status_code, 400);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(*client.credentials(), Credentials::default());
}
#[tokio::test]
async fn test_revoke_network_failure_still_clears_credentials() {
    let client = QuestradeClient::new(
        REFRESH_TOKEN,
        Environment::Custom("http://127.0.0.1:1/oauth2/".into()),
    )
    .unwrap();
    let err = client.revoke_auth().await.unwrap_err();
    assert!(matches!(err, QuestradeError::RequestError(_)), "got {err:?}");
    assert_eq!(*client.credentials(), Credentials::default());
}
#[tokio::test]
async fn test_revoke_timeout_still_clears_logged_in_session() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    let client = QuestradeClient::new_with_config(
        REFRESH_TOKEN,
        Environment::Custom(auth_root(&server)),
        Some(Duration::from_millis(200)),
    )
    .unwrap();
    client.login().await.expect("login failed");
    Mock::given(method("POST"))
        .and(path("/oauth2/revoke"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let err = client.revoke_auth().await.unwrap_err();
    assert!(matches!(err, QuestradeError::RequestError(_)), "got {err:?}");
    assert_eq!(*client.credentials(), Credentials::default());
}
