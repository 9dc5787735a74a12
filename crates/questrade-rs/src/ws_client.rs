use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info};

use crate::errors::QuestradeError;
use crate::markets::models::{Quote, QuoteBatch};
use crate::websocket::models::StreamAuthResponse;


/// An authenticated quote stream.
///
/// Owns its socket: [`read_next`](QuoteStream::read_next) takes `&mut self`,
/// so only one task can read at a time. Any read error is terminal; open a
/// new stream to continue.
#[derive(Debug)]
pub struct QuoteStream {
    socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl QuoteStream {
    /// Open `url` and authenticate with `access_token`.
    ///
    /// Fails unless the server acknowledges the token with `{"success": true}`.
    pub async fn connect(url: &str, access_token: &str) -> Result<Self, QuestradeError> {
        let (socket, response) = connect_async(url).await?;
        debug!(status = %response.status(), %url, "stream connected");
        let mut stream = QuoteStream { socket };
        stream.authenticate(access_token).await?;
        Ok(stream)
    }

    async fn authenticate(&mut self, access_token: &str) -> Result<(), QuestradeError> {
        self.socket.send(Message::text(access_token.to_string())).await?;
        let payload = self.next_payload().await?;
        let ack: StreamAuthResponse = serde_json::from_slice(&payload)?;
        if !ack.success {
            return Err(QuestradeError::StreamAuthRejected);
        }
        info!("quote stream authenticated");
        Ok(())
    }

    /// Body of the next data frame. Control frames are skipped; a close
    /// frame or the end of the stream is an error.
    async fn next_payload(&mut self) -> Result<Vec<u8>, QuestradeError> {
        loop {
            let message = match self.socket.next().await {
                Some(res) => res?,
                None => return Err(QuestradeError::StreamClosed),
            };
            match message {
                Message::Text(text) => return Ok(text.as_bytes().to_vec()),
                Message::Binary(bytes) => return Ok(bytes.to_vec()),
                Message::Close(_) => return Err(QuestradeError::StreamClosed),
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => continue,
            }
        }
    }

    /// Wait for the next quote batch.
    ///
    /// # Returns
    /// The quotes under the message's `quotes` key, or an empty vector when
    /// the message has none
    pub async fn read_next(&mut self) -> Result<Vec<Quote>, QuestradeError> {
        let payload = self.next_payload().await?;
        let batch: QuoteBatch = serde_json::from_slice(&payload)?;
        debug!(count = batch.quotes.len(), "quote batch");
        Ok(batch.quotes)
    }

    /// Send a close frame and shut the connection down.
    pub async fn close(mut self) -> Result<(), QuestradeError> {
        self.socket.close(None).await?;
        Ok(())
    }
}
