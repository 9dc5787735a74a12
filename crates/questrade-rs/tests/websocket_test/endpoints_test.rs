use crate::common::*;
use questrade_rs::websocket::models::StreamMode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
#[tokio::test]
async fn test_get_quote_stream_port() {
    let server = MockServer::start().await;
    let client = setup_logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/markets/quotes"))
        .and(query_param("ids", "8049,9291"))
        .and(query_param("stream", "true"))
        .and(query_param("mode", "RawSocket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"streamPort": 5000})))
        .expect(1)
        .mount(&server)
        .await;

    let port = client
        .get_quote_stream_port(StreamMode::RawSocket, &[8049, 9291])
        .await
        .unwrap();
    assert_eq!(port, 5000);
}
#[tokio::test]
async fn test_get_notification_stream_port() {
    let server = MockServer::start().await;
    let client = setup_logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/notifications"))
        .and(query_param("mode", "WebSocket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"streamPort": 5001})))
        .expect(1)
        .mount(&server)
        .await;

    let port = client
        .get_notification_stream_port(StreamMode::WebSocket)
        .await
        .unwrap();
    assert_eq!(port, 5001);
}
#[tokio::test]
async fn test_stream_quotes_end_to_end() {
    let server = MockServer::start().await;
    let client = setup_logged_in_client(&server).await;
    let frames = vec![r#"{"quotes":[{"symbol":"AAPL","symbolId":8049,"askPrice":171.0}]}"#.to_string()];
    let (ws_port, token_rx) = spawn_stream_server(r#"{"success":true}"#, frames).await;
    Mock::given(method("GET"))
        .and(path("/v1/markets/quotes"))
        .and(query_param("ids", "8049"))
        .and(query_param("stream", "true"))
        .and(query_param("mode", "WebSocket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"streamPort": ws_port})))
        .expect(1)
        .mount(&server)
        .await;

    let mut stream = client.stream_quotes(&[8049]).await.unwrap();
    assert_eq!(token_rx.await.unwrap(), ACCESS_TOKEN);
    let quotes = stream.read_next().await.unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].ask_price, Some(171.0));
    stream.close().await.unwrap();
}
