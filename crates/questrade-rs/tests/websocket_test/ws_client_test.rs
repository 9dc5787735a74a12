use crate::common::*;
use questrade_rs::{QuestradeError, QuoteStream};
const ACK: &str = r#"{"success":true}"#;
fn local(port: u16) -> String {
    format!("ws://127.0.0.1:{port}/")
}
#[tokio::test]
async fn test_connect_sends_token_first() {
    let (port, token_rx) = spawn_stream_server(ACK, vec![]).await;
    let stream = QuoteStream::connect(&local(port), ACCESS_TOKEN).await.unwrap();
    assert_eq!(token_rx.await.unwrap(), ACCESS_TOKEN);
    stream.close().await.unwrap();
}
#[tokio::test]
async fn test_rejected_token() {
    let (port, _) = spawn_stream_server(r#"{"success":false}"#, vec![]).await;
    let err = QuoteStream::connect(&local(port), ACCESS_TOKEN).await.unwrap_err();
    assert!(matches!(err, QuestradeError::StreamAuthRejected), "got {err:?}");
}
#[tokio::test]
async fn test_garbage_ack_is_parse_error() {
    let (port, _) = spawn_stream_server("hello", vec![]).await;
    let err = QuoteStream::connect(&local(port), ACCESS_TOKEN).await.unwrap_err();
    assert!(matches!(err, QuestradeError::ParseError(_)), "got {err:?}");
}
#[tokio::test]
async fn test_read_next_returns_quotes() {
    let frames = vec![
        r#"{"quotes":[{"symbol":"AAPL","symbolId":8049,"bidPrice":170.1},{"symbol":"BMO","symbolId":9291}]}"#.to_string(),
        r#"{"quotes":[{"symbol":"AAPL","symbolId":8049,"bidPrice":170.2}],"heartbeat":1}"#.to_string(),
    ];
    let (port, _) = spawn_stream_server(ACK, frames).await;
    let mut stream = QuoteStream::connect(&local(port), ACCESS_TOKEN).await.unwrap();

    let first = stream.read_next().await.unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first[1].symbol, "BMO");
    let second = stream.read_next().await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].bid_price, Some(170.2));
}
#[tokio::test]
async fn test_frame_without_quotes_is_empty() {
    let (port, _) = spawn_stream_server(ACK, vec![r#"{"foo":1}"#.to_string()]).await;
    let mut stream = QuoteStream::connect(&local(port), ACCESS_TOKEN).await.unwrap();
    let quotes = stream.read_next().await.unwrap();
    assert!(quotes.is_empty());
}
#[tokio::test]
async fn test_server_close_ends_stream() {
    let frame = r#"{"quotes":[{"symbol":"AAPL","symbolId":8049}]}"#.to_string();
    let port = spawn_closing_stream_server(vec![frame]).await;
    let mut stream = QuoteStream::connect(&local(port), ACCESS_TOKEN).await.unwrap();
    assert_eq!(stream.read_next().await.unwrap().len(), 1);
    let err = stream.read_next().await.unwrap_err();
    assert!(matches!(err, QuestradeError::StreamClosed), "got {err:?}");
}
#[tokio::test]
async fn test_null_fields_in_frames_read_as_defaults() {
    let frames = vec![
        r#"{"quotes":null}"#.to_string(),
        r#"{"quotes":[{"symbol":"AAPL","symbolId":8049,"bidSize":null,"volume":null,"isHalted":null}]}"#.to_string(),
    ];
    let (port, _) = spawn_stream_server(ACK, frames).await;
    let mut stream = QuoteStream::connect(&local(port), ACCESS_TOKEN).await.unwrap();

    assert!(stream.read_next().await.unwrap().is_empty());
    let quotes = stream.read_next().await.unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].bid_size, 0);
    assert_eq!(quotes[0].volume, 0);
    assert!(!quotes[0].is_halted);
}
#[tokio::test]
async fn test_invalid_frame_is_parse_error() {
    let (port, _) = spawn_stream_server(ACK, vec!["not json".to_string()]).await;
    let mut stream = QuoteStream::connect(&local(port), ACCESS_TOKEN).await.unwrap();
    let err = stream.read_next().await.unwrap_err();
    assert!(matches!(err, QuestradeError::ParseError(_)), "got {err:?}");
}
