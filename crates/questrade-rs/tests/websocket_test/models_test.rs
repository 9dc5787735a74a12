use questrade_rs::websocket::models::*;
#[test]
fn test_stream_auth_response_deserialization() {
    let ack: StreamAuthResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(ack.success);
    let ack: StreamAuthResponse = serde_json::from_str(r#"{"success":false,"reason":"x"}"#).unwrap();
    assert!(!ack.success);
}
#[test]
fn test_stream_auth_response_requires_success() {
    assert!(serde_json::from_str::<StreamAuthResponse>("{}").is_err());
}
#[test]
fn test_stream_mode_names() {
    assert_eq!(StreamMode::default(), StreamMode::WebSocket);
    assert_eq!(StreamMode::RawSocket.to_string(), "RawSocket");
}
